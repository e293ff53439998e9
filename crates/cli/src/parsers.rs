/// `usize` greater than zero.
///
/// # Errors
///
/// Returns a message when the value is not a positive integer.
pub fn parse_positive_usize(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(0) => Err("must be greater than 0".into()),
        Ok(n) => Ok(n),
        Err(_) => Err(format!("not a positive integer: {s}")),
    }
}

/// Worker count where `0` stands for "one per CPU".
///
/// # Errors
///
/// Returns a message when the value is not a non-negative integer.
pub fn parse_jobs(s: &str) -> Result<usize, String> {
    let n: usize = s
        .trim()
        .parse()
        .map_err(|_| format!("not a number of jobs: {s}"))?;
    Ok(if n == 0 { num_cpus::get() } else { n })
}

/// `WIDTHxHEIGHT` in pixels, e.g. `1280x720`.
///
/// # Errors
///
/// Returns a message for malformed or zero dimensions.
pub fn parse_size(s: &str) -> Result<(u32, u32), String> {
    let (w, h) = s
        .trim()
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("expected WIDTHxHEIGHT, got {s}"))?;
    let parse = |v: &str| -> Result<u32, String> {
        match v.trim().parse::<u32>() {
            Ok(0) | Err(_) => Err(format!("invalid dimension: {v}")),
            Ok(n) => Ok(n),
        }
    };
    Ok((parse(w)?, parse(h)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_usize() {
        assert_eq!(parse_positive_usize("3"), Ok(3));
        assert!(parse_positive_usize("0").is_err());
        assert!(parse_positive_usize("-1").is_err());
    }

    #[test]
    fn jobs_zero_means_all_cpus() {
        assert_eq!(parse_jobs("2"), Ok(2));
        assert_eq!(parse_jobs("0"), Ok(num_cpus::get()));
        assert!(parse_jobs("many").is_err());
    }

    #[test]
    fn size_pairs() {
        assert_eq!(parse_size("1280x720"), Ok((1280, 720)));
        assert_eq!(parse_size(" 800X600 "), Ok((800, 600)));
        assert!(parse_size("800").is_err());
        assert!(parse_size("0x600").is_err());
    }
}
