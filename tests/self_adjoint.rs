use assert_approx_eq::assert_approx_eq;
use faer_symv::dyn_stack::{GlobalPodBuffer, PodStack};
use faer_symv::linalg::matmul::self_adjoint::*;
use faer_symv::{c64, col, mat, scale, ComplexField, Conj, Side};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_c64(rng: &mut StdRng) -> c64 {
    c64::new(rng.gen::<f64>() - 0.5, rng.gen::<f64>() - 0.5)
}

#[test]
fn all_layouts_agree() {
    let rng = &mut StdRng::seed_from_u64(0);
    let n = 50;

    // full hermitian matrix, column-major
    let mut h = vec![c64::faer_zero(); n * n];
    for j in 0..n {
        h[j + j * n] = c64::new(rng.gen(), 0.0);
        for i in j + 1..n {
            let v = random_c64(rng);
            h[i + j * n] = v;
            h[j + i * n] = v.faer_conj();
        }
    }
    let mut h_row = vec![c64::faer_zero(); n * n];
    for j in 0..n {
        for i in 0..n {
            h_row[i * n + j] = h[i + j * n];
        }
    }

    let x_buf: Vec<c64> = (0..3 * n).map(|_| random_c64(rng)).collect();
    let x = col::from_slice_with_stride(&x_buf, n, 3);
    let alpha = c64::new(0.5, -1.5);

    let mut expected = vec![c64::faer_zero(); n];
    for i in 0..n {
        let mut sum = c64::faer_zero();
        for j in 0..n {
            sum = sum.faer_add(h[i + j * n].faer_mul(x.read(j)));
        }
        expected[i] = alpha.faer_mul(sum);
    }

    let views = [
        mat::from_column_major_slice(&h, n, n),
        mat::from_row_major_slice(&h_row, n, n),
    ];
    for lhs in views {
        for side in [Side::Lower, Side::Upper] {
            let mut acc = vec![c64::faer_zero(); n];
            matvec_self_adjoint(col::from_slice_mut(&mut acc), lhs, side, x, alpha);
            for (actual, expected) in acc.iter().zip(&expected) {
                assert_approx_eq!(actual.re, expected.re, 1e-10);
                assert_approx_eq!(actual.im, expected.im, 1e-10);
            }
        }
    }
}

#[test]
fn reusable_workspace() {
    let n = 12;
    let a: Vec<f64> = (0..n * n).map(|k| ((k % 7) as f64) - 3.0).collect();
    let x_buf: Vec<f64> = (0..2 * n).map(|k| k as f64 * 0.25).collect();
    let x = col::from_slice_with_stride(&x_buf, n, 2);

    let mut mem = GlobalPodBuffer::new(matvec_self_adjoint_req::<f64>(n, 2).unwrap());
    let mut stack = PodStack::new(&mut mem);

    let mut first = vec![1.0; n];
    let mut second = vec![1.0; n];
    for acc in [&mut first, &mut second] {
        matvec_self_adjoint_with_conj(
            col::from_slice_mut(acc),
            mat::from_column_major_slice(&a, n, n),
            Side::Upper,
            Conj::No,
            x,
            Conj::No,
            -2.0,
            faer_symv::reborrow::ReborrowMut::rb_mut(&mut stack),
        );
    }
    assert_eq!(first, second);
}

#[test]
fn scaled_real_operands() {
    // lower triangle of [[4, 1], [1, 2]]
    let a = [4.0, 1.0, f64::NAN, 2.0];
    let x = [1.0, -1.0];
    let mut acc = [10.0, 10.0];

    matvec_self_adjoint_scaled(
        col::from_slice_mut(&mut acc),
        scale(2.0) * mat::from_column_major_slice(&a, 2, 2),
        Side::Lower,
        scale(0.5) * col::from_slice(&x),
        3.0,
        PodStack::new(&mut []),
    );
    // 3 * [[4, 1], [1, 2]] * [1, -1] = [9, -3]
    assert_eq!(acc, [19.0, 7.0]);
}
