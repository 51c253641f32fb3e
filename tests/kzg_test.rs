#[cfg(test)]
mod tests {
    use ark_bn254::{Bn254, Fr, G1Affine};
    use ark_ff::UniformRand;
    use ark_std::{test_rng, One, Zero};
    use lazy_static::lazy_static;
    use rust_kzg_das::{
        errors::KzgError,
        fft::FftSettings,
        kzg::KzgSettings,
        polynomial::{eval_poly_at, evaluate_polynomial_in_evaluation_form, poly_long_div},
        srs::generate_trusted_setup,
    };

    const SECRET: u128 = 8927347823478352432985u128;

    lazy_static! {
        static ref FS_64: FftSettings<Fr> = FftSettings::new(6).unwrap();
        static ref KZG_64: KzgSettings<'static, Bn254> = {
            let (secret_g1, secret_g2) =
                generate_trusted_setup::<Bn254>(&Fr::from(SECRET), FS_64.max_width() + 1);
            KzgSettings::new(&FS_64, secret_g1, secret_g2).unwrap()
        };
    }

    fn random_poly(len: usize) -> Vec<Fr> {
        let mut rng = test_rng();
        (0..len).map(|_| Fr::rand(&mut rng)).collect()
    }

    #[test]
    fn test_commit_to_constant_poly() {
        // A constant polynomial commits to generator * constant.
        let value = Fr::from(7u64);
        let commitment = KZG_64.commit_to_poly(&[value]).unwrap();
        assert_eq!(commitment, G1Affine::from(KZG_64.secret_g1()[0] * value));
    }

    #[test]
    fn test_proof_single_accepts_correct_value() {
        let coeffs = random_poly(64);
        let commitment = KZG_64.commit_to_poly(&coeffs).unwrap();

        for x in [Fr::from(3u64), Fr::from(9999u64), -Fr::one()] {
            let y = eval_poly_at(&coeffs, &x);
            let proof = KZG_64.compute_proof_single(&coeffs, &x).unwrap();
            assert!(KZG_64.check_proof_single(&commitment, &proof, &x, &y).unwrap());
        }
    }

    #[test]
    fn test_proof_single_rejects_wrong_value() {
        let coeffs = random_poly(32);
        let commitment = KZG_64.commit_to_poly(&coeffs).unwrap();
        let x = Fr::from(17u64);
        let y = eval_poly_at(&coeffs, &x);
        let proof = KZG_64.compute_proof_single(&coeffs, &x).unwrap();

        assert!(!KZG_64
            .check_proof_single(&commitment, &proof, &x, &(y + Fr::one()))
            .unwrap());
        let other_x = x + Fr::one();
        assert!(!KZG_64
            .check_proof_single(&commitment, &proof, &other_x, &y)
            .unwrap());

        // Commitment or proof belonging to an unrelated polynomial fails.
        let mut other_coeffs = coeffs.clone();
        other_coeffs[5] += Fr::one();
        let other_commitment = KZG_64.commit_to_poly(&other_coeffs).unwrap();
        let other_proof = KZG_64.compute_proof_single(&other_coeffs, &x).unwrap();
        assert!(!KZG_64
            .check_proof_single(&other_commitment, &proof, &x, &y)
            .unwrap());
        assert!(!KZG_64
            .check_proof_single(&commitment, &other_proof, &x, &y)
            .unwrap());
    }

    #[test]
    fn test_proof_single_at_domain_points() {
        let coeffs = random_poly(64);
        let commitment = KZG_64.commit_to_poly(&coeffs).unwrap();
        let evals = FS_64.fft_fr(&coeffs, false).unwrap();

        for i in [0usize, 1, 31, 63] {
            let x = FS_64.expanded_roots_of_unity()[i];
            let proof = KZG_64.compute_proof_single(&coeffs, &x).unwrap();
            assert!(KZG_64
                .check_proof_single(&commitment, &proof, &x, &evals[i])
                .unwrap());
        }
    }

    #[test]
    fn test_proof_multi_over_coset() {
        let coeffs = random_poly(64);
        let commitment = KZG_64.commit_to_poly(&coeffs).unwrap();

        let n = 16;
        let x = Fr::from(5431u64);
        let stride = FS_64.max_width() / n;
        let ys: Vec<Fr> = (0..n)
            .map(|i| {
                let point = x * FS_64.expanded_roots_of_unity()[i * stride];
                eval_poly_at(&coeffs, &point)
            })
            .collect();

        let proof = KZG_64.compute_proof_multi(&coeffs, &x, n).unwrap();
        assert!(KZG_64.check_proof_multi(&commitment, &proof, &x, &ys).unwrap());

        // Tampering with any single evaluation must break the check.
        let mut bad_ys = ys.clone();
        bad_ys[7] = Fr::zero();
        assert!(!KZG_64
            .check_proof_multi(&commitment, &proof, &x, &bad_ys)
            .unwrap());
    }

    #[test]
    fn test_commit_rejects_oversized_poly() {
        let coeffs = vec![Fr::one(); KZG_64.secret_g1().len() + 1];
        assert!(matches!(
            KZG_64.commit_to_poly(&coeffs),
            Err(KzgError::SrsCapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_setup_requires_enough_g1_points() {
        let (secret_g1, secret_g2) = generate_trusted_setup::<Bn254>(&Fr::from(SECRET), 8);
        assert!(matches!(
            KzgSettings::<Bn254>::new(&FS_64, secret_g1, secret_g2),
            Err(KzgError::SrsCapacityExceeded { .. })
        ));
    }

    #[test]
    fn test_barycentric_evaluation_matches_coefficient_form() {
        let coeffs = random_poly(64);
        let evals = FS_64.fft_fr(&coeffs, false).unwrap();

        let mut rng = test_rng();
        let z = Fr::rand(&mut rng);
        assert_eq!(
            evaluate_polynomial_in_evaluation_form(&FS_64, &evals, &z).unwrap(),
            eval_poly_at(&coeffs, &z)
        );

        // On the domain the stored evaluation is returned as-is.
        let on_domain = FS_64.expanded_roots_of_unity()[5];
        assert_eq!(
            evaluate_polynomial_in_evaluation_form(&FS_64, &evals, &on_domain).unwrap(),
            evals[5]
        );
    }

    #[test]
    fn test_quotient_reconstructs_dividend() {
        // (p(X) - p(x)) = q(X) * (X - x) exactly
        let coeffs = random_poly(16);
        let x = Fr::from(123456u64);
        let y = eval_poly_at(&coeffs, &x);
        let divisor = [-x, Fr::one()];
        let quotient = poly_long_div(&coeffs, &divisor).unwrap();

        let mut rng = test_rng();
        let z = Fr::rand(&mut rng);
        assert_eq!(
            eval_poly_at(&quotient, &z) * (z - x),
            eval_poly_at(&coeffs, &z) - y
        );
    }
}
