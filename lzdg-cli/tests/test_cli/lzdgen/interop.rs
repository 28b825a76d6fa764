use crate::add_test;
use crate::common::Fixture;
use crate::MB;

// Higher ratios compress better with the system gzip.
add_test!(gzip_ratio_ordering, async {
    let mut fixture = Fixture::new();
    let mut previous = usize::MAX;

    for ratio in ["1", "3", "10"] {
        let output = fixture
            .run_cargo("lzdgen", &["-S", "1", "-s", "1m", "-r", ratio, "-"])
            .await;
        assert!(output.status.success(), "lzdgen failed: {}", output.stderr);
        assert_eq!(output.stdout_raw.len(), MB);

        let Some(gzip) = fixture
            .run_system_with_stdin("gzip", &["-c", "-6"], &output.stdout_raw)
            .await
        else {
            return;
        };
        assert!(gzip.status.success(), "gzip failed: {}", gzip.stderr);

        let compressed = gzip.stdout_raw.len();
        assert!(
            compressed < previous,
            "ratio {ratio}: {compressed} bytes, previous {previous}"
        );
        previous = compressed;
    }
});

// Generated data survives a gzip round trip.
add_test!(gzip_round_trip, async {
    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("lzdgen", &["-S", "99", "-s", "256k", "-"])
        .await;
    assert!(output.status.success());

    let Some(compressed) = fixture
        .run_system_with_stdin("gzip", &["-c"], &output.stdout_raw)
        .await
    else {
        return;
    };
    assert!(compressed.status.success());
    assert!(compressed.stdout_raw.len() < output.stdout_raw.len());

    let Some(restored) = fixture
        .run_system_with_stdin("gzip", &["-d", "-c"], &compressed.stdout_raw)
        .await
    else {
        return;
    };
    assert!(restored.status.success());
    assert!(restored.stdout_raw == output.stdout_raw);
});

// Piping several pipe buffers' worth of data through a filter does not stall
add_test!(large_output_through_filter, async {
    let mut fixture = Fixture::new();
    let output = fixture
        .run_cargo("lzdgen", &["-S", "7", "-s", "4m", "-r", "1", "-"])
        .await;
    assert!(output.status.success(), "lzdgen failed: {}", output.stderr);
    assert_eq!(output.stdout_raw.len(), 4 * MB);

    let Some(echoed) = fixture
        .run_system_with_stdin("cat", &[], &output.stdout_raw)
        .await
    else {
        return;
    };
    assert!(echoed.status.success());
    assert!(echoed.stdout_raw == output.stdout_raw);
});
