use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Display locale for weekday names and formatted dates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "pt-BR", alias = "pt")]
    PtBr,
    #[serde(rename = "en-US", alias = "en")]
    EnUs,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::PtBr => "pt-BR",
            Locale::EnUs => "en-US",
        }
    }

    /// Long weekday name, lowercase in pt-BR as Brazilian usage writes it
    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        match self {
            Locale::PtBr => match weekday {
                Weekday::Mon => "segunda-feira",
                Weekday::Tue => "terça-feira",
                Weekday::Wed => "quarta-feira",
                Weekday::Thu => "quinta-feira",
                Weekday::Fri => "sexta-feira",
                Weekday::Sat => "sábado",
                Weekday::Sun => "domingo",
            },
            Locale::EnUs => match weekday {
                Weekday::Mon => "Monday",
                Weekday::Tue => "Tuesday",
                Weekday::Wed => "Wednesday",
                Weekday::Thu => "Thursday",
                Weekday::Fri => "Friday",
                Weekday::Sat => "Saturday",
                Weekday::Sun => "Sunday",
            },
        }
    }

    pub fn format_date(&self, date: &NaiveDate) -> String {
        match self {
            Locale::PtBr => format!("{:02}/{:02}/{:04}", date.day(), date.month(), date.year()),
            Locale::EnUs => format!("{:02}/{:02}/{:04}", date.month(), date.day(), date.year()),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "pt-br" | "pt" => Ok(Locale::PtBr),
            "en-us" | "en" => Ok(Locale::EnUs),
            _ => Err(format!("Unsupported locale: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_names() {
        assert_eq!(Locale::PtBr.weekday_name(Weekday::Sat), "sábado");
        assert_eq!(Locale::EnUs.weekday_name(Weekday::Sat), "Saturday");
        assert_eq!(Locale::PtBr.weekday_name(Weekday::Mon), "segunda-feira");
    }

    #[test]
    fn test_date_format_per_locale() {
        let date = NaiveDate::from_ymd_opt(2024, 1, 8).unwrap();
        assert_eq!(Locale::PtBr.format_date(&date), "08/01/2024");
        assert_eq!(Locale::EnUs.format_date(&date), "01/08/2024");
    }

    #[test]
    fn test_locale_parsing() {
        assert_eq!("pt-BR".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("pt_br".parse::<Locale>(), Ok(Locale::PtBr));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::EnUs));
        assert!("fr-FR".parse::<Locale>().is_err());
    }
}
