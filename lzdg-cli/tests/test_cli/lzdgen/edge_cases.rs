use crate::add_test;
use crate::common::Fixture;

// Existing output is left alone without --force
add_test!(refuses_overwrite, async {
    const FILE_NAME: &str = "existing.bin";

    let mut fixture = Fixture::with_file(FILE_NAME, b"precious");
    let output = fixture
        .run_cargo("lzdgen", &["-s", "1k", &fixture.path(FILE_NAME)])
        .await;
    assert_eq!(output.status.code(), Some(1));
    assert!(
        output.stderr.contains("Output file already exists"),
        "stderr: {}",
        output.stderr
    );
    assert_eq!(fixture.read(FILE_NAME), b"precious");
});

// --force truncates a longer existing file
add_test!(force_truncates, async {
    const FILE_NAME: &str = "existing.bin";

    let mut fixture = Fixture::with_file(FILE_NAME, &[0xAB; 4096]);
    let output = fixture
        .run_cargo("lzdgen", &["-f", "-s", "100", &fixture.path(FILE_NAME)])
        .await;
    assert!(output.status.success(), "lzdgen failed: {}", output.stderr);
    assert_eq!(fixture.read(FILE_NAME).len(), 100);
});

// Output into a missing directory fails cleanly
add_test!(missing_directory, async {
    let mut fixture = Fixture::new();
    let path = fixture.path("no/such/dir/out.bin");
    let output = fixture.run_cargo("lzdgen", &["-s", "1k", &path]).await;
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stderr.starts_with("lzdgen: unable to open output file"));
});

// Sizes that are not a multiple of the block size
add_test!(odd_sizes, async {
    let mut fixture = Fixture::new();
    for size in ["1", "3", "257", "1048575", "1048577"] {
        let name = format!("odd_{size}.bin");
        let output = fixture
            .run_cargo("lzdgen", &["-s", size, &fixture.path(&name)])
            .await;
        assert!(output.status.success(), "size {size}: {}", output.stderr);
        assert_eq!(fixture.read(&name).len().to_string(), size);
    }
});

// Ratio 1.0 is the smallest accepted value
add_test!(ratio_lower_bound, async {
    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("lzdgen", &["-r", "1", "-s", "4k", &fixture.path("r1.bin")])
        .await;
    assert!(output.status.success(), "lzdgen failed: {}", output.stderr);

    let output = fixture
        .run_cargo("lzdgen", &["-r", "0.999", "-s", "4k", &fixture.path("r0.bin")])
        .await;
    assert_eq!(output.status.code(), Some(1));
    assert!(!fixture.file_exists("r0.bin"));
});
