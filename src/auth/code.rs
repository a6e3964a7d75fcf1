use rand::{rngs::OsRng, Rng};

const CODE_DIGITS: usize = 6;
const CODE_SPACE: u32 = 1_000_000;

/// Draw a fresh reset code from the OS entropy source.
pub fn generate_reset_code() -> String {
    reset_code_from(&mut OsRng)
}

/// Format a uniformly drawn number as a zero-padded code suitable for
/// manual entry. Leading zeros are part of the code.
pub fn reset_code_from<R: Rng>(rng: &mut R) -> String {
    format!("{:0width$}", rng.gen_range(0..CODE_SPACE), width = CODE_DIGITS)
}

#[cfg(test)]
mod tests {
    use rand::rngs::mock::StepRng;

    use super::*;

    #[test]
    fn codes_are_six_ascii_digits() {
        for _ in 0..100 {
            let code = generate_reset_code();
            assert_eq!(code.len(), CODE_DIGITS);
            assert!(code.bytes().all(|b| b.is_ascii_digit()));
        }
    }

    #[test]
    fn codes_stay_in_range() {
        for _ in 0..100 {
            let n: u32 = generate_reset_code().parse().unwrap();
            assert!(n < CODE_SPACE);
        }
    }

    #[test]
    fn leading_zeros_are_preserved() {
        let mut rng = StepRng::new(0, 0);
        assert_eq!(reset_code_from(&mut rng), "000000");
    }
}
