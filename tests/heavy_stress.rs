#![cfg(feature = "heavy")]
use halign::{align, LinearModel};
use rand::{rngs::StdRng, Rng, SeedableRng};

fn random_dna(rng: &mut StdRng, len: usize) -> Vec<u8> {
    const ALPHABET: &[u8] = b"ACGT";
    (0..len)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect()
}

#[test]
fn heavy_stress_align_medium() {
    let mut rng = StdRng::seed_from_u64(123);
    let model = LinearModel::new(2, -1, -2);
    let a = random_dna(&mut rng, 50_000);
    let b = random_dna(&mut rng, 50_000);
    let aln = align(&a, &b, &model).unwrap();
    // Bounded between all-gaps and all-matches; must rescore exactly.
    assert!(aln.score <= 2 * 50_000);
    assert!(aln.score >= -2 * 100_000);
    assert_eq!(aln.rescore(&model).unwrap(), aln.score);
}

#[test]
fn heavy_stress_identity_long() {
    let mut rng = StdRng::seed_from_u64(7);
    let model = LinearModel::new(1, -1, -1);
    let a = random_dna(&mut rng, 100_000);
    let aln = align(&a, &a, &model).unwrap();
    assert_eq!(aln.score, 100_000);
    assert_eq!(aln.seq_a, a);
    assert_eq!(aln.seq_b, a);
}
