#![allow(non_snake_case)]
use super::compute::near_zero_threshold;
use super::*;
use crate::algebra::*;

fn test_problem_3x4() -> LinearProblem<f64> {
    // A =
    //[-1.0  -17.0  6.0  10.0]
    //[ 3.0     ⋅   7.0    ⋅ ]
    //[  ⋅    -4.0   ⋅   -5.0]
    let A = CscMatrix::from(&[
        [-1., -17., 6., 10.], //
        [3., 0., 7., 0.],     //
        [0., -4., 0., -5.],   //
    ]);
    LinearProblem::new(A, vec![1., 2., 3.], vec![0.; 4]).unwrap()
}

#[test]
fn test_near_zero_threshold() {
    let problem = test_problem_3x4();
    let A = problem.matrix().unwrap();

    let t = near_zero_threshold(A, f64::EPSILON);
    assert_eq!(t, 17. * f64::EPSILON);

    // never below the smallest normal value
    let t = near_zero_threshold(A, 0.0);
    assert_eq!(t, f64::MIN_POSITIVE);

    let Z = CscMatrix::<f64>::spalloc(2, 2, 0);
    assert_eq!(near_zero_threshold(&Z, 1.0), f64::MIN_POSITIVE);
}

#[test]
fn test_work_vector_sized_on_first_use() {
    let mut problem = test_problem_3x4();
    let mut scaling = Scaling::<f64>::default();
    scaling.add_user_scaling(ScaleType::Right, vec![2.; 4].into());
    assert!(scaling.work.is_empty());

    scaling.scale_linear_system(&mut problem).unwrap();
    assert_eq!(scaling.work.len(), 4);

    scaling.unscale_linear_system(&mut problem).unwrap();
    assert_eq!(scaling.work.len(), 4);
    assert_eq!(problem, test_problem_3x4());
}

#[test]
fn test_depth_counter() {
    let mut problem = test_problem_3x4();
    let mut scaling = Scaling::<f64>::default();
    scaling.add_user_scaling(ScaleType::Left, vec![2.; 3].into());

    assert!(!scaling.is_scaled());
    scaling.scale_linear_system(&mut problem).unwrap();
    scaling.scale_linear_system(&mut problem).unwrap();
    assert_eq!(scaling.scale_depth(), 2);

    scaling.unscale_linear_system(&mut problem).unwrap();
    assert_eq!(scaling.scale_depth(), 1);
    assert!(scaling.is_scaled());

    scaling.unscale_linear_system(&mut problem).unwrap();
    assert!(!scaling.is_scaled());
    assert_eq!(problem, test_problem_3x4());

    assert_eq!(
        scaling.unscale_linear_system(&mut problem),
        Err(ScalingError::AsymmetricUnscale)
    );
    assert_eq!(scaling.scale_depth(), 0);
}

#[test]
fn test_unpaired_unscale_allowed() {
    let mut problem = test_problem_3x4();
    let settings = ScalingSettingsBuilder::default()
        .enforce_pairing(false)
        .build()
        .unwrap();
    let mut scaling = Scaling::<f64>::new(settings);
    scaling.add_user_scaling(ScaleType::Left, vec![2.; 3].into());

    scaling.unscale_linear_system(&mut problem).unwrap();
    assert_eq!(scaling.scale_depth(), 0);
    assert_eq!(problem.rhs(), &[0.5, 1., 1.5]);
}

#[test]
fn test_unmapped_helper() {
    let mut scaling = Scaling::<f64>::default();
    scaling.add_identity_scaling(ScaleType::Left);
    scaling.add_user_scaling(ScaleType::Left, SharedDiagonal::new(3));
    scaling.add_col_sum_scaling(ScaleType::Right, SharedDiagonal::new(4));

    assert_eq!(
        scaling.unmapped(|e| e.source().needs_computation()),
        Some(ScalingError::UnmappedSource {
            index: 2,
            kind: SourceType::ColSum
        })
    );
    assert_eq!(
        scaling.unmapped(|e| e.diagonal().is_some()),
        Some(ScalingError::UnmappedSource {
            index: 1,
            kind: SourceType::UserDefined
        })
    );
    assert_eq!(scaling.unmapped(|_| false), None);
}

#[test]
fn test_check_dimensions() {
    let mut scaling = Scaling::<f64>::default();
    scaling.add_identity_scaling(ScaleType::Right);
    scaling.add_row_sum_scaling(ScaleType::Left, SharedDiagonal::new(3));
    assert!(scaling.check_dimensions(3, 4).is_ok());

    // row sums taken over 3 rows cannot act on 4 columns
    scaling.add_row_sum_scaling(ScaleType::Right, SharedDiagonal::new(3));
    assert_eq!(
        scaling.check_dimensions(3, 4),
        Err(ScalingError::DimensionMismatch {
            index: 2,
            side: ScaleType::Right,
            expected: 4,
            found: 3
        })
    );
    assert!(scaling.check_dimensions(3, 3).is_ok());
}

#[test]
fn test_check_factors() {
    let mut scaling = Scaling::<f64>::default();
    scaling.add_user_scaling(ScaleType::Left, vec![1., 2., 3.].into());
    assert!(scaling.check_factors().is_ok());

    scaling.add_user_scaling(ScaleType::Right, vec![1., f64::NAN].into());
    assert_eq!(
        scaling.check_factors(),
        Err(ScalingError::InvalidFactor {
            index: 1,
            position: 1
        })
    );
}

#[test]
fn test_invalid_factor_leaves_problem_untouched() {
    let mut problem = test_problem_3x4();
    let mut scaling = Scaling::<f64>::default();
    scaling.add_user_scaling(ScaleType::Left, vec![2.; 3].into());
    scaling.add_user_scaling(ScaleType::Right, vec![1., 0., 1., 1.].into());

    assert_eq!(
        scaling.scale_linear_system(&mut problem),
        Err(ScalingError::InvalidFactor {
            index: 1,
            position: 1
        })
    );
    assert_eq!(problem, test_problem_3x4());
    assert!(!scaling.is_scaled());
}

#[test]
fn test_borrowed_diagonal() {
    let problem = test_problem_3x4();
    let d = SharedDiagonal::<f64>::new(3);
    let mut scaling = Scaling::default();
    scaling.add_row_sum_scaling(ScaleType::Left, d.clone());

    let guard = d.borrow_mut();
    assert_eq!(
        scaling.compute_scaling(&problem),
        Err(ScalingError::DiagonalBorrowed { index: 0 })
    );
    assert!(scaling.to_string().contains("(borrowed)"));
    drop(guard);

    scaling.compute_scaling(&problem).unwrap();
    assert_eq!(d.to_vec(), vec![1. / 34., 1. / 10., 1. / 9.]);
}

#[test]
fn test_print_summary() {
    let mut scaling = Scaling::<f64>::default();
    scaling.add_user_scaling(ScaleType::Left, vec![0.5, 0.25].into());
    scaling.add_identity_scaling(ScaleType::Right);
    scaling.add_col_sum_scaling(ScaleType::Right, SharedDiagonal::new(12));

    let text = scaling.to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "scaling: 3 entries");
    assert_eq!(lines[1], "  [0] Left  UserDefined [5.0000e-1, 2.5000e-1]");
    assert_eq!(lines[2], "  [1] Right None        (identity)");
    assert!(lines[3].starts_with("  [2] Right ColSum      n = 12"));
}

#[test]
fn test_print_while_scaled() {
    let mut problem = test_problem_3x4();
    let mut scaling = Scaling::<f64>::default();
    scaling.add_user_scaling(ScaleType::Left, vec![2.; 3].into());
    scaling.scale_linear_system(&mut problem).unwrap();

    assert!(scaling
        .to_string()
        .starts_with("scaling: 1 entries (applied, depth = 1)"));
}

#[test]
fn test_borrowed_diagonal_leaves_others_unwritten() {
    let problem = test_problem_3x4();
    let d0 = SharedDiagonal::<f64>::new(3);
    let d1 = SharedDiagonal::<f64>::new(4);
    let mut scaling = Scaling::default();
    scaling.add_row_sum_scaling(ScaleType::Left, d0.clone());
    scaling.add_col_sum_scaling(ScaleType::Right, d1.clone());

    // a shared read on the second diagonal blocks the whole computation
    let guard = d1.borrow();
    assert_eq!(
        scaling.compute_scaling(&problem),
        Err(ScalingError::DiagonalBorrowed { index: 1 })
    );
    assert_eq!(d0.to_vec(), vec![1.; 3]);
    drop(guard);

    scaling.compute_scaling(&problem).unwrap();
    assert_eq!(d0.to_vec(), vec![1. / 34., 1. / 10., 1. / 9.]);
    assert_eq!(d1.to_vec(), vec![1. / 4., 1. / 21., 1. / 13., 1. / 15.]);
}

#[test]
fn test_same_diagonal_computed_twice() {
    let problem = test_problem_3x4();
    let d = SharedDiagonal::<f64>::new(3);
    let mut scaling = Scaling::default();
    scaling.add_row_sum_scaling(ScaleType::Left, d.clone());
    scaling.add_row_sum_scaling(ScaleType::Left, d.clone());

    scaling.compute_scaling(&problem).unwrap();
    assert_eq!(d.to_vec(), vec![1. / 34., 1. / 10., 1. / 9.]);
}
