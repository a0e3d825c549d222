use iobench::bench::SequentialBenchmark;
use iobench::config::BenchConfig;
use iobench::io::fixture::create_input_file;
use iobench::util::units::throughput_mbs;

fn assert_consistent(size: u32, time: f64, throughput: f64) {
    assert!(time > 0.0);
    assert!(throughput.is_finite());
    let relative = (throughput * time - f64::from(size)).abs() / f64::from(size);
    assert!(relative < 1e-9, "throughput {} * time {} != {}", throughput, time, size);
}

#[test]
fn test_throughput_matches_reported_times() {
    let dir = tempfile::tempdir().unwrap();
    let config = BenchConfig::new().with_data_dir(dir.path());
    for size in [1u32, 4] {
        create_input_file(&config.layout().input_path(size), size).unwrap();
    }

    let benchmark = SequentialBenchmark::new(config).unwrap();
    for size in [1u32, 4] {
        let result = benchmark.run(size).unwrap();
        assert_eq!(result.file_size_mb, size);
        assert_consistent(size, result.read_time, result.read_throughput_mbs);
        assert_consistent(size, result.write_time, result.write_throughput_mbs);
        assert_eq!(result.read_throughput_mbs, throughput_mbs(size, result.read_time));
    }
}

#[test]
fn test_buffer_size_does_not_change_result_shape() {
    let dir = tempfile::tempdir().unwrap();
    let base = BenchConfig::new().with_data_dir(dir.path());
    create_input_file(&base.layout().input_path(1), 1).unwrap();

    for buffer_size in [512usize, 8192, 1024 * 1024] {
        let benchmark = SequentialBenchmark::new(base.clone().with_buffer_size(buffer_size)).unwrap();
        let result = benchmark.run(1).unwrap();
        assert_consistent(1, result.write_time, result.write_throughput_mbs);
        assert!(!benchmark.layout().output_path(1).exists());
    }
}
