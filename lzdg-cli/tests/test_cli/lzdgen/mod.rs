mod edge_cases;
mod interop;
