/// ARPAbet symbols for General American English (stress markers omitted).
pub const ARPABET: [&str; 39] = [
    // vowels
    "AA", "AE", "AH", "AO", "EH", "ER", "IH", "IY", "UH", "UW",
    // diphthongs
    "AW", "AY", "EY", "OW", "OY",
    // stops
    "P", "B", "T", "D", "K", "G",
    // affricates
    "CH", "JH",
    // fricatives
    "F", "V", "TH", "DH", "S", "Z", "SH", "ZH", "HH",
    // nasals
    "M", "N", "NG",
    // liquids / glides
    "L", "R", "W", "Y",
];

/// Case-insensitive; a trailing stress digit (`AH0`, `IY1`) is accepted.
pub fn is_arpabet(symbol: &str) -> bool {
    let base = symbol.trim_end_matches(|c: char| matches!(c, '0' | '1' | '2'));
    ARPABET.iter().any(|p| p.eq_ignore_ascii_case(base))
}

/// Symbols of `phonemes` that are not ARPAbet, in order, without repeats.
pub fn unrecognized<'a, I>(phonemes: I) -> Vec<&'a str>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut out: Vec<&str> = Vec::new();
    for p in phonemes {
        if !is_arpabet(p) && !out.contains(&p) {
            out.push(p);
        }
    }
    out
}
