use std::sync::OnceLock;

use regex::Regex;

/// Flavor assumed for kernels whose extraversion carries no flavor tag.
pub const DEFAULT_FLAVOR: &str = "generic";

/// Flavor names come in a few shapes: `generic`, `generic-5`,
/// `generic-5.15`, and multi-part ones like `intel-iotg-5.15`. Only the
/// leading lowercase-and-dash run is kept.
fn flavor_regex() -> &'static Regex {
    static FLAVOR_RE: OnceLock<Regex> = OnceLock::new();
    FLAVOR_RE.get_or_init(|| {
        Regex::new(r"^([a-z-]+[a-z])-*\d?.*$").expect("invalid ubuntu flavor regex")
    })
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[error("extraversion '{extraversion}' does not match any known ubuntu flavor naming")]
pub struct ExtraversionError {
    pub extraversion: String,
}

/// Build number and flavor split out of an Ubuntu extraversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedExtraversion {
    build_number: String,
    flavor: String,
}

impl ParsedExtraversion {
    pub fn build_number(&self) -> &str {
        &self.build_number
    }

    pub fn flavor(&self) -> &str {
        &self.flavor
    }
}

/// Split an extraversion such as `188-generic` into `("188", "generic")`.
///
/// The input must appear exactly as in `uname -r`. Without a `-` the whole
/// string is the build number and the flavor defaults to `generic`.
pub fn parse_extraversion(extraversion: &str) -> Result<ParsedExtraversion, ExtraversionError> {
    let Some((build_number, flavor_text)) = extraversion.split_once('-') else {
        return Ok(ParsedExtraversion {
            build_number: extraversion.to_string(),
            flavor: DEFAULT_FLAVOR.to_string(),
        });
    };

    let flavor = flavor_regex()
        .captures(flavor_text)
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| ExtraversionError {
            extraversion: extraversion.to_string(),
        })?;

    Ok(ParsedExtraversion {
        build_number: build_number.to_string(),
        flavor: flavor.as_str().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(s: &str) -> (String, String) {
        let parsed = parse_extraversion(s).unwrap();
        (parsed.build_number().to_string(), parsed.flavor().to_string())
    }

    #[test]
    fn no_separator_defaults_to_generic() {
        for input in ["188", "", "1.2"] {
            assert_eq!(parse(input), (input.to_string(), "generic".to_string()));
        }
    }

    #[test]
    fn plain_flavor() {
        assert_eq!(parse("188-generic"), ("188".into(), "generic".into()));
        assert_eq!(parse("1054-aws"), ("1054".into(), "aws".into()));
    }

    #[test]
    fn version_suffix_is_dropped() {
        assert_eq!(parse("25-generic-5.15"), ("25".into(), "generic".into()));
        assert_eq!(parse("25-generic-5"), ("25".into(), "generic".into()));
    }

    #[test]
    fn multi_part_flavors_survive() {
        assert_eq!(parse("31-intel-iotg-5.15"), ("31".into(), "intel-iotg".into()));
        assert_eq!(parse("45-lowlatency-hwe"), ("45".into(), "lowlatency-hwe".into()));
    }

    #[test]
    fn malformed_flavor_is_an_error() {
        for input in ["188-", "188-5.15", "188-Generic", "188-x"] {
            let err = parse_extraversion(input).unwrap_err();
            assert_eq!(err.extraversion, input);
        }
    }
}
