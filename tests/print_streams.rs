#![allow(non_snake_case)]

use diagscale::{algebra::*, io::ConfigurablePrintTarget, scaling::*};

fn test_print_problem() -> LinearProblem<f64> {
    let A = CscMatrix::from(&[
        [1., 1.], //
        [0., 4.], //
    ]);
    LinearProblem::new(A, vec![1., 1.], vec![0.; 2]).unwrap()
}

fn test_print_scaling() -> Scaling<f64> {
    let settings = ScalingSettingsBuilder::default()
        .verbose(true)
        .build()
        .unwrap();
    let mut scaling = Scaling::new(settings);
    scaling.add_row_sum_scaling(ScaleType::Left, SharedDiagonal::new(2));
    scaling
}

#[test]
fn test_print_to_stdout() {
    let mut scaling = test_print_scaling();
    scaling.print_to_stdout();
    scaling.compute_scaling(&test_print_problem()).unwrap();
}

#[test]
fn test_print_to_buffer() {
    let mut scaling = test_print_scaling();
    scaling.print_to_buffer();
    scaling.compute_scaling(&test_print_problem()).unwrap();
    let result = scaling.get_print_buffer().unwrap();
    assert!(result.contains("scaling: 1 entries"));
    assert!(result.contains("[5.0000e-1, 2.5000e-1]"));
}

#[test]
fn test_print_buffer_not_configured() {
    let mut scaling = test_print_scaling();
    scaling.print_to_sink();
    assert!(scaling.get_print_buffer().is_err());
}

#[test]
fn test_print_quiet() {
    let mut scaling = test_print_scaling();
    scaling.settings.verbose = false;
    scaling.print_to_buffer();
    scaling.compute_scaling(&test_print_problem()).unwrap();
    assert!(scaling.get_print_buffer().unwrap().is_empty());
}

#[test]
fn test_print_to_file() {
    use std::io::{Read, Seek};

    let mut scaling = test_print_scaling();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    scaling.print_to_file(file.into_file());
    scaling.compute_scaling(&test_print_problem()).unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("RowSum"));
}

#[test]
fn test_print_to_stream() {
    use std::io::{Read, Seek};

    let mut scaling = test_print_scaling();
    let file = tempfile::NamedTempFile::new().unwrap();
    let mut file2 = file.reopen().unwrap();
    let stream = Box::new(file.into_file());

    scaling.print_to_stream(stream);
    scaling.report().unwrap();

    file2.seek(std::io::SeekFrom::Start(0)).unwrap();
    let mut result = String::new();
    file2.read_to_string(&mut result).unwrap();
    assert!(result.contains("[0] Left"));
}

#[test]
fn test_print_to_sink() {
    let mut scaling = test_print_scaling();
    scaling.print_to_sink();
    scaling.compute_scaling(&test_print_problem()).unwrap();
    // no output
}
