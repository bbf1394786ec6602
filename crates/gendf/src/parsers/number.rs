// nom parser combinators
use nom::character::complete::{digit1, one_of};
use nom::combinator::{opt, recognize};
use nom::number::complete::recognize_float;
use nom::sequence::pair;
use nom::IResult;

// groupy modules
use groupy_utils::f;

use crate::parsers::cause;

/// ENDF real value, where the `e` of the exponent is usually dropped
///
/// Card images squeeze reals into 11 columns by writing `1.234567-5` for
/// `1.234567e-5`. Both that shorthand and ordinary `1.234567E-05` notation
/// are accepted, as are plain decimals.
pub(crate) fn endf_f64(i: &str) -> IResult<&str, f64> {
    let (i, mantissa) = recognize_float(i)?;
    let (i, exponent) = opt(recognize(pair(one_of("+-"), digit1)))(i)?;

    let text = match exponent {
        // something like `1.0e5+3` is just broken
        Some(_) if mantissa.contains(['e', 'E']) => return Err(cause(i)),
        Some(exponent) => f!("{mantissa}e{exponent}"),
        None => mantissa.to_string(),
    };

    match text.parse::<f64>() {
        Ok(value) => Ok((i, value)),
        Err(_) => Err(cause(i)),
    }
}

/// Signed integer value
pub(crate) fn endf_i64(i: &str) -> IResult<&str, i64> {
    nom::character::complete::i64(i)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shorthand_exponent() {
        assert_eq!(endf_f64("1.0-5"), Ok(("", 1.0e-5)));
        assert_eq!(endf_f64("9.223800+4"), Ok(("", 92238.0)));
        assert_eq!(endf_f64("1.00000+10"), Ok(("", 1.0e10)));
        assert_eq!(endf_f64("-9.49360-11"), Ok(("", -9.4936e-11)));
        assert_eq!(endf_f64("2.43155-12"), Ok(("", 2.43155e-12)));
    }

    #[test]
    fn explicit_exponent() {
        assert_eq!(endf_f64("1.0E+5"), Ok(("", 1.0e5)));
        assert_eq!(endf_f64("1.0e-5"), Ok(("", 1.0e-5)));
        assert_eq!(endf_f64("-2.5E3"), Ok(("", -2500.0)));
    }

    #[test]
    fn plain_values() {
        assert_eq!(endf_f64("293.6"), Ok(("", 293.6)));
        assert_eq!(endf_f64("0"), Ok(("", 0.0)));
        assert_eq!(endf_f64("+.5"), Ok(("", 0.5)));
    }

    #[test]
    fn stops_at_the_next_value() {
        assert_eq!(endf_f64("1.5+2 3.0"), Ok((" 3.0", 150.0)));
        assert_eq!(endf_f64("1.111-001-2.222+02"), Ok(("-2.222+02", 0.1111)));
    }

    #[test]
    fn rejects_garbage() {
        assert!(endf_f64("abc").is_err());
        assert!(endf_f64("1.0e5+3").is_err());
    }

    #[test]
    fn integers() {
        assert_eq!(endf_i64("9237"), Ok(("", 9237)));
        assert_eq!(endf_i64("-1"), Ok(("", -1)));
        assert!(endf_i64("x1").is_err());
    }
}
