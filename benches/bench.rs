use criterion::{criterion_group, criterion_main, Criterion};
use dyn_stack::{GlobalPodBuffer, PodStack};
use rand::{rngs::StdRng, Rng, SeedableRng};
use reborrow::*;

use faer_symv::linalg::matmul::self_adjoint::*;
use faer_symv::{c64, col, mat, Conj, NoSimd, Side};

pub fn self_adjoint(c: &mut Criterion) {
    let rng = &mut StdRng::seed_from_u64(0);

    for n in [16, 64, 256, 1024, 4096] {
        let a: Vec<f64> = (0..n * n).map(|_| rng.gen()).collect();
        let x: Vec<f64> = (0..2 * n).map(|_| rng.gen()).collect();
        let mut acc = vec![0.0f64; n];

        c.bench_function(&format!("symv-f64-col-lower-{n}"), |b| {
            b.iter(|| {
                matvec_self_adjoint_with_conj(
                    col::from_slice_mut(&mut acc),
                    mat::from_column_major_slice(&a, n, n),
                    Side::Lower,
                    Conj::No,
                    col::from_slice(&x[..n]),
                    Conj::No,
                    1.0,
                    PodStack::new(&mut []),
                );
            })
        });

        c.bench_function(&format!("symv-f64-row-lower-{n}"), |b| {
            b.iter(|| {
                matvec_self_adjoint_with_conj(
                    col::from_slice_mut(&mut acc),
                    mat::from_row_major_slice(&a, n, n),
                    Side::Lower,
                    Conj::No,
                    col::from_slice(&x[..n]),
                    Conj::No,
                    1.0,
                    PodStack::new(&mut []),
                );
            })
        });

        c.bench_function(&format!("symv-f64-col-lower-scalar-{n}"), |b| {
            b.iter(|| {
                matvec_self_adjoint_with_conj_arch(
                    NoSimd,
                    col::from_slice_mut(&mut acc),
                    mat::from_column_major_slice(&a, n, n),
                    Side::Lower,
                    Conj::No,
                    col::from_slice(&x[..n]),
                    Conj::No,
                    1.0,
                    PodStack::new(&mut []),
                );
            })
        });

        c.bench_function(&format!("symv-f64-col-lower-strided-{n}"), |b| {
            let mut mem = GlobalPodBuffer::new(matvec_self_adjoint_req::<f64>(n, 2).unwrap());
            let mut stack = PodStack::new(&mut mem);
            b.iter(|| {
                matvec_self_adjoint_with_conj(
                    col::from_slice_mut(&mut acc),
                    mat::from_column_major_slice(&a, n, n),
                    Side::Lower,
                    Conj::No,
                    col::from_slice_with_stride(&x, n, 2),
                    Conj::No,
                    1.0,
                    stack.rb_mut(),
                );
            })
        });

        let a: Vec<c64> = (0..n * n).map(|_| c64::new(rng.gen(), rng.gen())).collect();
        let x: Vec<c64> = (0..n).map(|_| c64::new(rng.gen(), rng.gen())).collect();
        let mut acc = vec![c64::new(0.0, 0.0); n];

        for (order, name) in [(false, "col"), (true, "row")] {
            for (side, side_name) in [(Side::Lower, "lower"), (Side::Upper, "upper")] {
                c.bench_function(&format!("symv-c64-{name}-{side_name}-{n}"), |b| {
                    let lhs = if order {
                        mat::from_row_major_slice(&a, n, n)
                    } else {
                        mat::from_column_major_slice(&a, n, n)
                    };
                    b.iter(|| {
                        matvec_self_adjoint_with_conj(
                            col::from_slice_mut(&mut acc),
                            lhs,
                            side,
                            Conj::No,
                            col::from_slice(&x),
                            Conj::Yes,
                            c64::new(1.0, 0.0),
                            PodStack::new(&mut []),
                        );
                    })
                });
            }
        }
    }
}

criterion_group!(benches, self_adjoint);
criterion_main!(benches);
