//! Localisation line for generated copy.

use crate::creative::LanguageRegister;

/// Country assumed when the project names none.
pub const DEFAULT_COUNTRY: &str = "USA";

/// One `LANGUAGE:` line for the target market.
///
/// Indonesian markets get an explicit register (pronoun pair); every other
/// country is asked for its native language.
pub fn language_instruction(country: &str, register: LanguageRegister) -> String {
    if !country.to_lowercase().contains("indonesia") {
        return format!("LANGUAGE: Native language of {country}.");
    }
    match register {
        LanguageRegister::Slang => {
            "LANGUAGE: Bahasa Indonesia (Gaya santai/Gaul). Gunakan 'Gue/Lo'.".to_owned()
        }
        LanguageRegister::Professional => {
            "LANGUAGE: Bahasa Indonesia (Formal). Gunakan 'Anda/Saya'.".to_owned()
        }
        LanguageRegister::Casual => {
            "LANGUAGE: Bahasa Indonesia (Casual). Gunakan 'Aku/Kamu'.".to_owned()
        }
    }
}
