//! Brazilian tax identifier validators
//!
//! CPF (individuals, 11 digits) and CNPJ (legal entities, 14 digits) both end
//! in two check digits computed from a weighted sum modulo 11. Input may carry
//! the usual `.`, `-` and `/` mask characters; everything that is not a digit
//! is stripped before checking.

use log::{debug, trace};

use crate::errors::{ValidationError, ValidationResult};
use crate::report::{IdentifierKind, IdentifierValidation};
use crate::sanitizers::clean_digits;

const CPF: &str = "CPF";
const CNPJ: &str = "CNPJ";

const CPF_BASE_LEN: usize = 9;
const CNPJ_BASE_LEN: usize = 12;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

fn to_digits(cleaned: &str) -> Vec<u32> {
    cleaned.chars().filter_map(|c| c.to_digit(10)).collect()
}

fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|pair| pair[0] == pair[1])
}

/// CPF check digit over `digits`, weights descending from `digits.len() + 1` to 2
fn cpf_check_digit(digits: &[u32]) -> u32 {
    let top = digits.len() as u32 + 1;
    let sum: u32 = digits
        .iter()
        .zip((2..=top).rev())
        .map(|(d, w)| d * w)
        .sum();
    (sum * 10) % 11 % 10
}

/// CNPJ check digit over `digits` using the matching cyclic weight table
fn cnpj_check_digit(digits: &[u32], weights: &[u32]) -> u32 {
    let sum: u32 = digits.iter().zip(weights).map(|(d, w)| d * w).sum();
    match sum % 11 {
        r if r < 2 => 0,
        r => 11 - r,
    }
}

fn expect_digit(document: &'static str, position: usize, expected: u32, found: u32) -> ValidationResult<()> {
    if expected == found {
        Ok(())
    } else {
        Err(ValidationError::CheckDigitMismatch {
            document,
            position,
            expected,
            found,
        })
    }
}

fn expect_length(document: &'static str, digits: &[u32], expected: usize) -> ValidationResult<()> {
    if digits.len() == expected {
        Ok(())
    } else {
        Err(ValidationError::InvalidLength {
            document,
            expected,
            actual: digits.len(),
        })
    }
}

/// Check a CPF and return its cleaned 11 digits
pub fn check_individual_id(input: &str) -> ValidationResult<String> {
    let cleaned = clean_digits(input);
    let digits = to_digits(&cleaned);

    expect_length(CPF, &digits, 11)?;
    if is_repeated(&digits) {
        return Err(ValidationError::RepeatedDigits(CPF));
    }

    let first = cpf_check_digit(&digits[..9]);
    expect_digit(CPF, 10, first, digits[9])?;

    let second = cpf_check_digit(&digits[..10]);
    expect_digit(CPF, 11, second, digits[10])?;

    Ok(cleaned)
}

/// Check a CNPJ and return its cleaned 14 digits
pub fn check_business_id(input: &str) -> ValidationResult<String> {
    let cleaned = clean_digits(input);
    let digits = to_digits(&cleaned);

    expect_length(CNPJ, &digits, 14)?;
    if is_repeated(&digits) {
        return Err(ValidationError::RepeatedDigits(CNPJ));
    }

    let first = cnpj_check_digit(&digits[..12], &CNPJ_FIRST_WEIGHTS);
    expect_digit(CNPJ, 13, first, digits[12])?;

    let second = cnpj_check_digit(&digits[..13], &CNPJ_SECOND_WEIGHTS);
    expect_digit(CNPJ, 14, second, digits[13])?;

    Ok(cleaned)
}

/// Returns true if `input` is a CPF with correct check digits
pub fn validate_individual_id(input: &str) -> bool {
    match check_individual_id(input) {
        Ok(_) => true,
        Err(err) => {
            trace!("CPF rejected: {}", err);
            false
        }
    }
}

/// Returns true if `input` is a CNPJ with correct check digits
pub fn validate_business_id(input: &str) -> bool {
    match check_business_id(input) {
        Ok(_) => true,
        Err(err) => {
            trace!("CNPJ rejected: {}", err);
            false
        }
    }
}

/// Classify a raw document by digit count and validate it as CPF or CNPJ
pub fn validate_identifier(raw: &str) -> IdentifierValidation {
    let cleaned = clean_digits(raw);

    match IdentifierKind::from_digit_count(cleaned.len()) {
        Some(IdentifierKind::Individual) => IdentifierValidation::classified(
            IdentifierKind::Individual,
            validate_individual_id(&cleaned),
        ),
        Some(IdentifierKind::Business) => IdentifierValidation::classified(
            IdentifierKind::Business,
            validate_business_id(&cleaned),
        ),
        None => {
            debug!("Document with {} digits is neither CPF nor CNPJ", cleaned.len());
            IdentifierValidation::unclassified()
        }
    }
}

fn expect_base(document: &'static str, base: &str, expected: usize) -> ValidationResult<Vec<u32>> {
    let cleaned = clean_digits(base);
    let digits = to_digits(&cleaned);
    expect_length(document, &digits, expected)?;
    Ok(digits)
}

fn render(digits: &[u32]) -> String {
    digits
        .iter()
        .filter_map(|d| char::from_digit(*d, 10))
        .collect()
}

/// Append the two CPF check digits to 9 base digits
///
/// The result is not guaranteed to pass [`validate_individual_id`]: a base of
/// nine identical digits yields a repeated-digit sequence for some values.
pub fn complete_individual_id(base: &str) -> ValidationResult<String> {
    let mut digits = expect_base(CPF, base, CPF_BASE_LEN)?;
    let first = cpf_check_digit(&digits);
    digits.push(first);
    let second = cpf_check_digit(&digits);
    digits.push(second);
    Ok(render(&digits))
}

/// Append the two CNPJ check digits to 12 base digits
pub fn complete_business_id(base: &str) -> ValidationResult<String> {
    let mut digits = expect_base(CNPJ, base, CNPJ_BASE_LEN)?;
    let first = cnpj_check_digit(&digits, &CNPJ_FIRST_WEIGHTS);
    digits.push(first);
    let second = cnpj_check_digit(&digits, &CNPJ_SECOND_WEIGHTS);
    digits.push(second);
    Ok(render(&digits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};
    use test_case::test_case;

    fn random_base(rng: &mut StdRng, len: usize) -> String {
        (0..len)
            .map(|_| char::from_digit(rng.gen_range(0..10), 10).unwrap())
            .collect()
    }

    /// Every single-digit substitution of `valid` at `position`
    fn mutations(valid: &str, position: usize) -> Vec<String> {
        let original = valid.as_bytes()[position];
        (b'0'..=b'9')
            .filter(|d| *d != original)
            .map(|d| {
                let mut bytes = valid.as_bytes().to_vec();
                bytes[position] = d;
                String::from_utf8(bytes).unwrap()
            })
            .collect()
    }

    #[test_case("529.982.247-25" ; "masked")]
    #[test_case("52998224725" ; "bare")]
    #[test_case("123.456.789-09" ; "sequential base")]
    #[test_case(" 111.444.777-35 " ; "surrounding whitespace")]
    fn test_valid_individual_ids(input: &str) {
        assert!(validate_individual_id(input));
    }

    #[test_case("529.982.247-24" ; "wrong second digit")]
    #[test_case("529.982.247-15" ; "wrong first digit")]
    #[test_case("5299822472" ; "ten digits")]
    #[test_case("529982247250" ; "twelve digits")]
    #[test_case("" ; "empty")]
    #[test_case("abc.def.ghi-jk" ; "no digits")]
    fn test_invalid_individual_ids(input: &str) {
        assert!(!validate_individual_id(input));
    }

    #[test]
    fn test_repeated_individual_ids_rejected() {
        for d in 0..10 {
            let repeated = d.to_string().repeat(11);
            assert!(!validate_individual_id(&repeated), "{} accepted", repeated);
            assert_eq!(
                check_individual_id(&repeated),
                Err(ValidationError::RepeatedDigits("CPF"))
            );
        }
    }

    #[test]
    fn test_check_individual_id_reasons() {
        assert_eq!(check_individual_id("529.982.247-25").unwrap(), "52998224725");
        assert_eq!(
            check_individual_id("123"),
            Err(ValidationError::InvalidLength {
                document: "CPF",
                expected: 11,
                actual: 3
            })
        );
        assert_eq!(
            check_individual_id("52998224735"),
            Err(ValidationError::CheckDigitMismatch {
                document: "CPF",
                position: 10,
                expected: 2,
                found: 3
            })
        );
    }

    #[test_case("11.222.333/0001-81" ; "masked")]
    #[test_case("11222333000181" ; "bare")]
    #[test_case("45.723.174/0001-10" ; "second sample")]
    fn test_valid_business_ids(input: &str) {
        assert!(validate_business_id(input));
    }

    #[test_case("11.222.333/0001-80" ; "wrong second digit")]
    #[test_case("11.222.333/0001-91" ; "wrong first digit")]
    #[test_case("1122233300018" ; "thirteen digits")]
    #[test_case("52998224725" ; "cpf length")]
    fn test_invalid_business_ids(input: &str) {
        assert!(!validate_business_id(input));
    }

    #[test]
    fn test_repeated_business_ids_rejected() {
        for d in 0..10 {
            let repeated = d.to_string().repeat(14);
            assert!(!validate_business_id(&repeated), "{} accepted", repeated);
        }
    }

    #[test]
    fn test_generated_individual_ids() {
        let mut rng = StdRng::seed_from_u64(0x0c9f);
        let (mut total, mut undetected) = (0u32, 0u32);
        for _ in 0..200 {
            let base = random_base(&mut rng, 9);
            let id = complete_individual_id(&base).unwrap();
            if id.bytes().all(|b| b == id.as_bytes()[0]) {
                continue;
            }
            assert!(validate_individual_id(&id), "{} rejected", id);

            for position in 9..11 {
                for mutated in mutations(&id, position) {
                    assert!(!validate_individual_id(&mutated), "{} accepted", mutated);
                }
            }
            for position in 0..9 {
                for mutated in mutations(&id, position) {
                    total += 1;
                    if validate_individual_id(&mutated) {
                        undetected += 1;
                    }
                }
            }
        }
        // Remainders 0 and 10 share check digit 0, so a few base substitutions collide
        assert!(undetected * 50 < total, "{} of {} undetected", undetected, total);
    }

    #[test]
    fn test_generated_business_ids() {
        let mut rng = StdRng::seed_from_u64(0xc4a7);
        let (mut total, mut undetected) = (0u32, 0u32);
        for _ in 0..200 {
            let base = random_base(&mut rng, 12);
            let id = complete_business_id(&base).unwrap();
            if id.bytes().all(|b| b == id.as_bytes()[0]) {
                continue;
            }
            assert!(validate_business_id(&id), "{} rejected", id);

            for position in 12..14 {
                for mutated in mutations(&id, position) {
                    assert!(!validate_business_id(&mutated), "{} accepted", mutated);
                }
            }
            for position in 0..12 {
                for mutated in mutations(&id, position) {
                    total += 1;
                    if validate_business_id(&mutated) {
                        undetected += 1;
                    }
                }
            }
        }
        // Weights repeat across the cycle, so a few base substitutions collide
        assert!(undetected * 50 < total, "{} of {} undetected", undetected, total);
    }

    #[test]
    fn test_complete_rejects_wrong_base_length() {
        assert!(complete_individual_id("12345678").is_err());
        assert!(complete_business_id("1122233300").is_err());
        assert_eq!(complete_individual_id("529.982.247").unwrap(), "52998224725");
        assert_eq!(complete_business_id("11.222.333/0001").unwrap(), "11222333000181");
    }

    #[test]
    fn test_validate_identifier_classification() {
        let report = validate_identifier("123.456.789-09");
        assert_eq!(report.kind, Some(IdentifierKind::Individual));
        assert!(report.is_valid);
        assert_eq!(report.message, "Valid CPF");

        let report = validate_identifier("11.222.333/0001-81");
        assert_eq!(report.kind, Some(IdentifierKind::Business));
        assert!(report.is_valid);
        assert_eq!(report.message, "Valid CNPJ");

        let report = validate_identifier("11.222.333/0001-82");
        assert_eq!(report.kind, Some(IdentifierKind::Business));
        assert!(!report.is_valid);
        assert_eq!(report.message, "Invalid CNPJ");

        let report = validate_identifier("12345");
        assert_eq!(report.kind, None);
        assert!(!report.is_valid);
        assert!(report.message.contains("11"));
        assert!(report.message.contains("14"));
    }
}
