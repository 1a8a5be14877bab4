use std::str::FromStr;

/// Unix permission bits given in octal, with or without a `0o`/`0` prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FileModeArg(pub u32);

impl FromStr for FileModeArg {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0o")
            .or_else(|| s.strip_prefix("0O"))
            .unwrap_or(s);
        if digits.is_empty() {
            return Err(format!("Invalid file mode: {s:?}"));
        }
        let mode =
            u32::from_str_radix(digits, 8).map_err(|_| format!("Invalid octal file mode: {s}"))?;
        if mode > 0o7777 {
            return Err(format!("File mode out of range: {s}"));
        }
        Ok(Self(mode))
    }
}
