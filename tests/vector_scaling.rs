#![allow(non_snake_case)]

use diagscale::{algebra::*, scaling::*};

fn test_scaling() -> (Scaling<f64>, SharedDiagonal<f64>, SharedDiagonal<f64>) {
    let dl = SharedDiagonal::from_vec(vec![2., 3.]);
    let dr = SharedDiagonal::from_vec(vec![0.5, 4., 10.]);

    let mut scaling = Scaling::default();
    scaling.add_user_scaling(ScaleType::Left, dl.clone());
    scaling.add_user_scaling(ScaleType::Right, dr.clone());
    scaling.add_user_scaling(ScaleType::Left, vec![0.5, 0.5].into());
    (scaling, dl, dr)
}

#[test]
fn test_apply_left_right() {
    let (scaling, _, _) = test_scaling();

    let mut r = vec![0.; 2];
    scaling.apply_left_scaling(&[4., 5.], &mut r).unwrap();
    assert_eq!(r, vec![4., 7.5]);

    let mut r = vec![0.; 3];
    scaling.apply_right_scaling(&[1., 1., 2.], &mut r).unwrap();
    assert_eq!(r, vec![0.5, 4., 20.]);

    let mut v = vec![1., 1., 1.];
    scaling.apply_right_scaling_in_place(&mut v).unwrap();
    assert_eq!(v, vec![0.5, 4., 10.]);

    let mut v = vec![1., -1.];
    scaling.apply_left_scaling_in_place(&mut v).unwrap();
    assert_eq!(v, vec![1., -1.5]);
}

#[test]
fn test_apply_does_not_modify_state() {
    let (scaling, dl, dr) = test_scaling();

    let A = CscMatrix::<f64>::identity(2);
    let problem = LinearProblem::new(A, vec![1., 1.], vec![0.; 2]).unwrap();
    let before = problem.clone();

    let mut r = vec![0.; 2];
    scaling.apply_left_scaling(&[4., 5.], &mut r).unwrap();
    scaling.apply_left_scaling(&[4., 5.], &mut r).unwrap();
    assert_eq!(r, vec![4., 7.5]);

    assert_eq!(dl.to_vec(), vec![2., 3.]);
    assert_eq!(dr.to_vec(), vec![0.5, 4., 10.]);
    assert_eq!(problem, before);
    assert!(!scaling.is_scaled());
}

#[test]
fn test_apply_without_entries() {
    let mut scaling = Scaling::<f64>::default();
    scaling.add_identity_scaling(ScaleType::Left);

    let mut r = vec![0.; 3];
    scaling.apply_left_scaling(&[1., 2., 3.], &mut r).unwrap();
    assert_eq!(r, vec![1., 2., 3.]);
    scaling.apply_right_scaling(&[4., 5., 6.], &mut r).unwrap();
    assert_eq!(r, vec![4., 5., 6.]);
}

#[test]
fn test_apply_length_errors() {
    let (scaling, _, _) = test_scaling();

    let mut r = vec![0.; 3];
    assert_eq!(
        scaling.apply_left_scaling(&[1., 1.], &mut r),
        Err(ScalingError::VectorLength {
            expected: 2,
            found: 3
        })
    );

    let mut r = vec![0.; 2];
    assert_eq!(
        scaling.apply_right_scaling(&[1., 1.], &mut r),
        Err(ScalingError::DimensionMismatch {
            index: 1,
            side: ScaleType::Right,
            expected: 2,
            found: 3
        })
    );
    assert_eq!(r, vec![0.; 2]);
}

#[test]
fn test_net_scaling() {
    let (scaling, _, _) = test_scaling();
    assert_eq!(scaling.net_scaling(ScaleType::Left, 2).unwrap(), vec![1., 1.5]);
    assert_eq!(
        scaling.net_scaling(ScaleType::Right, 3).unwrap(),
        vec![0.5, 4., 10.]
    );
    assert!(scaling.net_scaling(ScaleType::Right, 2).is_err());
}
