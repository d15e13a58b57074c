use std::fs;
use std::path::Path;

use binclass::evaluation::{CrossValidator, Folds, ReportFormat};
use binclass::io::{read_folds, read_test_set, read_training_set, write_folds};
use binclass::{Algorithm, ClassifierError, Label, classify};
use tempfile::tempdir;

const TRAINING: &str = "\
1.0,2.0,yes
5.0,5.0,no
1.5,2.5,yes
4.5,5.5,no
";

fn write(dir: &Path, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

/// Two noisy blobs, alternating classes, 40 rows.
fn blob_rows() -> String {
    let mut rows = String::new();
    for i in 0..40 {
        let jitter = (i % 7) as f64 * 0.13;
        if i % 2 == 0 {
            rows.push_str(&format!("{},{},yes\n", 1.0 + jitter, 2.0 - jitter));
        } else {
            rows.push_str(&format!("{},{},no\n", 6.0 - jitter, 7.0 + jitter));
        }
    }
    rows
}

#[test]
fn files_to_predictions_for_both_algorithms() {
    let dir = tempdir().unwrap();
    let training = read_training_set(&write(dir.path(), "train.csv", TRAINING)).unwrap();
    let test = read_test_set(&write(dir.path(), "test.csv", "1.2,2.2\n4.9,5.1\n")).unwrap();

    for token in ["NB", "1NN", "3NN"] {
        let predictions = classify(token, &training, &test).unwrap();
        assert_eq!(predictions.len(), 2, "{token}");
        assert_eq!(predictions[0], Label::Positive, "{token}");
    }
    assert_eq!(
        classify("1NN", &training, &test).unwrap(),
        vec![Label::Positive, Label::Negative]
    );
}

#[test]
fn output_vocabulary_matches_input_files() {
    let dir = tempdir().unwrap();
    let training = read_training_set(&write(dir.path(), "train.csv", TRAINING)).unwrap();
    let test = read_test_set(&write(dir.path(), "test.csv", "1.2,2.2\n4.9,5.1\n")).unwrap();
    let lines: Vec<String> = classify("NB", &training, &test)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(lines, vec!["yes", "no"]);
}

#[test]
fn unknown_algorithm_produces_no_predictions() {
    let dir = tempdir().unwrap();
    let training = read_training_set(&write(dir.path(), "train.csv", TRAINING)).unwrap();
    let test = read_test_set(&write(dir.path(), "test.csv", "1.2,2.2\n")).unwrap();
    assert_eq!(
        classify("KNN", &training, &test),
        Err(ClassifierError::UnknownAlgorithm("KNN".into()))
    );
}

#[test]
fn test_file_with_extra_column_is_a_dimension_error() {
    let dir = tempdir().unwrap();
    let training = read_training_set(&write(dir.path(), "train.csv", TRAINING)).unwrap();
    let test = read_test_set(&write(dir.path(), "test.csv", "1.0,2.0\n1.0,2.0\n"))
        .unwrap();
    assert!(classify("2NN", &training, &test).is_ok());

    let wide = read_test_set(&write(dir.path(), "wide.csv", "1.0,2.0,3.0\n")).unwrap();
    assert!(matches!(
        classify("2NN", &training, &wide),
        Err(ClassifierError::DimensionMismatch { expected: 2, found: 3, .. })
    ));
}

#[test]
fn cross_validation_with_fold_dump_and_report() {
    let dir = tempdir().unwrap();
    let training = read_training_set(&write(dir.path(), "train.csv", &blob_rows())).unwrap();

    let validator = CrossValidator::new(Algorithm::KNearestNeighbors { k: 3 }, 10);
    let folds = validator.partition(&training).unwrap();
    assert_eq!(folds.len(), 10);
    assert_eq!(folds.total_examples(), 40);

    let folds_path = dir.path().join("pima-folds.csv");
    write_folds(&folds_path, &folds).unwrap();
    let text = fs::read_to_string(&folds_path).unwrap();
    assert!(text.starts_with("fold1\n"));
    assert!(text.contains("\n\nfold10\n"));
    assert_eq!(read_folds(&folds_path).unwrap(), folds);

    let report = validator.evaluate_folds(&folds).unwrap();
    assert_eq!(report.fold_count(), 10);
    assert!((0.0..=1.0).contains(&report.mean_accuracy));
    assert_eq!(report.mean_accuracy, 1.0);

    let report_path = dir.path().join("report.tsv");
    report.export(&report_path, ReportFormat::Tsv).unwrap();
    let tsv = fs::read_to_string(&report_path).unwrap();
    assert_eq!(tsv.lines().count(), 12);
    assert!(tsv.starts_with("fold\tsize\tcorrect\taccuracy\n"));
}

#[test]
fn naive_bayes_cross_validation_on_blobs() {
    let dir = tempdir().unwrap();
    let training = read_training_set(&write(dir.path(), "train.csv", &blob_rows())).unwrap();
    let report = CrossValidator::new(Algorithm::NaiveBayes, 4)
        .evaluate(&training)
        .unwrap();
    assert_eq!(report.mean_accuracy, 1.0);
}

#[test]
fn partition_without_cross_validation_keeps_everything() {
    let dir = tempdir().unwrap();
    let training = read_training_set(&write(dir.path(), "train.csv", &blob_rows())).unwrap();
    for n in [1, 3, 7, 40, 41] {
        let folds = Folds::stratified(n, &training).unwrap();
        assert_eq!(folds.total_examples(), training.len(), "n = {n}");
    }
}
