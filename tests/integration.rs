//! Integration tests for the moving hyperplane generator

use moving_hyperplane::config::GeneratorSettings;
use moving_hyperplane::generator::Direction;
use moving_hyperplane::{
    ConfigError, CsvSink, Error, Example, GeneratorConfig, Label, MovingHyperplane, RowId,
    StreamGenerator,
};

const TOLERANCE: f64 = 1e-9;

fn reference_config() -> GeneratorConfig {
    GeneratorConfig {
        seed: 42,
        example_count: 100,
        dimensions: 3,
        noise_fraction: 0.0,
        weights_per_round: 3,
        drift_magnitude: 0.01,
    }
}

fn assert_rejected(config: GeneratorConfig, expected: ConfigError) {
    match MovingHyperplane::new(config) {
        Err(Error::Config(err)) => assert_eq!(err, expected),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("generator should not have been built"),
    }
}

#[test]
fn test_identical_seeds_identical_streams() {
    let mut a = MovingHyperplane::new(reference_config()).unwrap();
    let mut b = MovingHyperplane::new(reference_config()).unwrap();

    for i in 0..10 {
        let x = a.next_example(RowId(i));
        let y = b.next_example(RowId(i));
        assert_eq!(x, y);
        assert_eq!(a.hyperplane(), b.hyperplane());
    }
}

#[test]
fn test_seed_42_first_example_is_stable() {
    let mut generator = MovingHyperplane::new(reference_config()).unwrap();

    let state = generator.hyperplane();
    assert_eq!(
        state.directions(),
        &[Direction::Down, Direction::Down, Direction::Up]
    );
    assert_eq!(
        state.weights(),
        &[0.6478793420448367, 0.42134326226898455, 0.6825283673074368]
    );
    assert!((state.threshold() - 0.875875485810629).abs() < 1e-15);

    let example = generator.next_example(RowId(0));
    assert_eq!(example.row, RowId(0));
    assert_eq!(example.label, Label::Positive);
    assert_eq!(
        example.features,
        vec![0.5048028684122285, 0.16642268771465973, 0.8995231500105201]
    );
}

#[test]
fn test_different_seeds_differ() {
    let mut a = MovingHyperplane::new(reference_config()).unwrap();
    let mut b = MovingHyperplane::new(GeneratorConfig {
        seed: 43,
        ..reference_config()
    })
    .unwrap();

    let xs: Vec<Example> = a.iter().take(10).collect();
    let ys: Vec<Example> = b.iter().take(10).collect();
    assert_ne!(xs, ys);
}

#[test]
fn test_shape_and_label_domain() {
    let config = GeneratorConfig {
        dimensions: 7,
        noise_fraction: 0.3,
        ..reference_config()
    };
    let mut generator = MovingHyperplane::new(config).unwrap();

    for example in generator.iter().take(500) {
        assert_eq!(example.features.len(), 7);
        assert!(matches!(example.label, Label::Positive | Label::Negative));
        assert!(example.features.iter().all(|x| (0.0..1.0).contains(x)));
    }
}

#[test]
fn test_zero_noise_fidelity() {
    let mut generator = MovingHyperplane::new(reference_config()).unwrap();

    for i in 0..1000 {
        let state = generator.hyperplane().clone();
        let example = generator.next_example(RowId(i));

        let score: f64 = example
            .features
            .iter()
            .zip(state.weights())
            .map(|(x, w)| x * w)
            .sum();
        let expected = if score >= state.threshold() {
            Label::Positive
        } else {
            Label::Negative
        };
        assert_eq!(example.label, expected, "row {}", i);
    }
}

#[test]
fn test_threshold_and_direction_invariants() {
    let config = GeneratorConfig {
        dimensions: 5,
        weights_per_round: 2,
        drift_magnitude: 5.0,
        ..reference_config()
    };
    let mut generator = MovingHyperplane::new(config).unwrap();

    for _ in 0..2000 {
        generator.next();
        let state = generator.hyperplane();
        let half_sum = state.weights().iter().sum::<f64>() / 2.0;
        assert!((state.threshold() - half_sum).abs() < TOLERANCE);
        assert_eq!(state.weights().len(), 5);
        assert_eq!(state.directions().len(), 5);
        assert!(state
            .directions()
            .iter()
            .all(|d| d.sign() == 1.0 || d.sign() == -1.0));
    }
}

#[test]
fn test_per_round_drift_bound() {
    let config = GeneratorConfig {
        dimensions: 6,
        weights_per_round: 3,
        ..reference_config()
    };
    let step = config.drift_magnitude / config.example_count as f64;
    let mut generator = MovingHyperplane::new(config).unwrap();

    for _ in 0..300 {
        let before = generator.hyperplane().clone();
        generator.next();
        let after = generator.hyperplane();

        let mut moved = 0;
        for i in 0..6 {
            let delta = after.weights()[i] - before.weights()[i];
            if delta != 0.0 {
                moved += 1;
                assert!((delta.abs() - step).abs() < 1e-12);
                // The move follows the direction held before the round
                assert_eq!(delta.signum(), before.directions()[i].sign());
            }
        }
        assert_eq!(moved, 3);
    }
}

#[test]
fn test_full_update_moves_every_weight() {
    let config = GeneratorConfig {
        dimensions: 4,
        weights_per_round: 10,
        ..reference_config()
    };
    let mut generator = MovingHyperplane::new(config).unwrap();

    for _ in 0..100 {
        let before = generator.hyperplane().weights().to_vec();
        generator.next();
        assert!(before
            .iter()
            .zip(generator.hyperplane().weights())
            .all(|(a, b)| a != b));
    }
}

#[test]
fn test_directions_eventually_reverse() {
    let config = GeneratorConfig {
        dimensions: 4,
        weights_per_round: 4,
        ..reference_config()
    };
    let mut generator = MovingHyperplane::new(config).unwrap();
    let initial: Vec<Direction> = generator.hyperplane().directions().to_vec();

    let mut reversed = false;
    for _ in 0..200 {
        generator.next();
        if generator.hyperplane().directions() != initial.as_slice() {
            reversed = true;
            break;
        }
    }
    assert!(reversed);
}

#[test]
fn test_construction_rejections() {
    assert_rejected(
        GeneratorConfig {
            dimensions: 0,
            ..reference_config()
        },
        ConfigError::InvalidDimensions(0),
    );
    assert_rejected(
        GeneratorConfig {
            example_count: 0,
            ..reference_config()
        },
        ConfigError::ZeroExampleCount(0),
    );
    assert_rejected(
        GeneratorConfig {
            noise_fraction: 1.5,
            ..reference_config()
        },
        ConfigError::NoiseOutOfRange(1.5),
    );

    let settings = GeneratorSettings {
        weight_update_count: -1,
        ..GeneratorSettings::seeded(42)
    };
    assert_eq!(
        settings.into_config(),
        Err(ConfigError::NegativeUpdateCount(-1))
    );
}

#[test]
fn test_settings_drive_generator() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.toml");
    std::fs::write(
        &path,
        "example_count = 50\ndimensions = 4\nnoise_percent = 0\nseed = 5\nuse_random_seed = false\n",
    )
    .unwrap();

    let config = GeneratorSettings::from_file(&path)
        .unwrap()
        .into_config()
        .unwrap();
    assert_eq!(config.seed, 5);
    assert_eq!(config.noise_fraction, 0.0);

    let mut a = MovingHyperplane::new(config.clone()).unwrap();
    let mut b = MovingHyperplane::new(config).unwrap();
    assert_eq!(a.generate_table(), b.generate_table());
}

#[test]
fn test_csv_file_output() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("stream.csv");

    let mut generator = MovingHyperplane::new(reference_config()).unwrap();
    let file = std::fs::File::create(&path).unwrap();
    let mut sink = CsvSink::new(file);
    generator.write_to(&mut sink, 100).unwrap();
    drop(sink);

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.len(), 5);
    assert_eq!(&headers[1], "Label");

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 100);
    assert_eq!(&rows[0][0], "Row 0");
    assert!(rows
        .iter()
        .all(|r| &r[1] == "Positive" || &r[1] == "Negative"));
}
