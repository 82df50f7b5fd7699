use ark_bn254::{Fq2, G1Affine, G2Affine};
use ark_ec::AffineRepr;
use ark_ff::MontFp;
use ark_serialize::{CanonicalDeserialize, CanonicalSerialize};

/// The verification half of the HyperKZG trusted setup.
///
/// [`Default`] is the production setup: the BN254 generators and the `tau * H`
/// point of the powers-of-tau ceremony. Tests substitute a setup with a known
/// `tau` so they can play the prover.
#[derive(Clone, Debug, PartialEq, Eq, CanonicalSerialize, CanonicalDeserialize)]
pub struct HyperKzgVerifierSetup {
    /// The G1 generator `(1, 2)`.
    pub g: G1Affine,
    /// The G2 generator.
    pub h: G2Affine,
    /// `tau * H` from the trusted setup.
    pub tau_h: G2Affine,
}

impl Default for HyperKzgVerifierSetup {
    fn default() -> Self {
        Self {
            g: G1Affine::generator(),
            h: G2Affine::generator(),
            tau_h: production_tau_h(),
        }
    }
}

/// `tau * H` of the production ceremony.
fn production_tau_h() -> G2Affine {
    G2Affine::new_unchecked(
        Fq2::new(
            MontFp!(
                "18253511544609001572866960948873128266198935669250718031100637619547827597184"
            ),
            MontFp!(
                "10764647077472957448033591885865458661573660819003350325268673957890498500987"
            ),
        ),
        Fq2::new(
            MontFp!(
                "19756181390911900613508142947142748782977087973617411469215564659012323409872"
            ),
            MontFp!(
                "15207030507740967976352749097256929091435606784526748170016829002013506957017"
            ),
        ),
    )
}
