//! ARPAbet → IPA symbol mapping.
//!
//! CMUdict spells pronunciations in ARPAbet with stress digits on vowels
//! (`AE1`, `IY0`). Stress is dropped; symbols outside the table pass through
//! lower-cased so nothing silently disappears.

/// IPA for one ARPAbet symbol, stress digits stripped.
pub fn symbol_to_ipa(symbol: &str) -> String {
    let base: String = symbol.chars().filter(|c| !c.is_ascii_digit()).collect();
    let ipa = match base.as_str() {
        // Consonants
        "P" => "p",
        "B" => "b",
        "T" => "t",
        "D" => "d",
        "K" => "k",
        "G" => "ɡ",
        "CH" => "t͡ʃ",
        "JH" => "d͡ʒ",
        "F" => "f",
        "V" => "v",
        "TH" => "θ",
        "DH" => "ð",
        "S" => "s",
        "Z" => "z",
        "SH" => "ʃ",
        "ZH" => "ʒ",
        "HH" => "h",
        "M" => "m",
        "N" => "n",
        "NG" => "ŋ",
        "L" => "l",
        "R" => "ɹ",
        "Y" => "j",
        "W" => "w",
        // Vowels
        "AA" => "ɑ",
        "AE" => "æ",
        "AH" => "ʌ",
        "AO" => "ɔ",
        "AW" => "aʊ",
        "AY" => "aɪ",
        "EH" => "ɛ",
        "ER" => "ɝ",
        "EY" => "eɪ",
        "IH" => "ɪ",
        "IY" => "i",
        "OW" => "oʊ",
        "OY" => "ɔɪ",
        "UH" => "ʊ",
        "UW" => "u",
        _ => return base.to_lowercase(),
    };
    ipa.to_string()
}

/// IPA for a whole word's phone sequence, phones concatenated.
pub fn phones_to_ipa<'a, I>(phones: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    phones.into_iter().map(symbol_to_ipa).collect()
}
