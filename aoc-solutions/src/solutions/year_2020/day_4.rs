use anyhow::{Context, anyhow, bail, ensure};
use aoc_solver::{BlankLine, Cursor, DaySolver, Elements, ParseError, Parseable, SolveError};
use aoc_solver_macros::{AutoRegisterSolver, RawValueEnum};
use std::ops::RangeInclusive;

#[derive(AutoRegisterSolver)]
#[aoc(year = 2020, day = 4, tags = ["validation"])]
pub struct Solver {
    records: Vec<PassportRecord>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, RawValueEnum)]
pub enum FieldKey {
    #[raw = "byr"]
    BirthYear,
    #[raw = "iyr"]
    IssueYear,
    #[raw = "eyr"]
    ExpirationYear,
    #[raw = "hgt"]
    Height,
    #[raw = "hcl"]
    HairColor,
    #[raw = "ecl"]
    EyeColor,
    #[raw = "pid"]
    PassportId,
    #[raw = "cid"]
    CountryId,
}

impl FieldKey {
    const MANDATORY: [FieldKey; 7] = [
        FieldKey::BirthYear,
        FieldKey::IssueYear,
        FieldKey::ExpirationYear,
        FieldKey::Height,
        FieldKey::HairColor,
        FieldKey::EyeColor,
        FieldKey::PassportId,
    ];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, RawValueEnum)]
pub enum EyeColor {
    #[raw = "amb"]
    Amber,
    #[raw = "blu"]
    Blue,
    #[raw = "brn"]
    Brown,
    #[raw = "gry"]
    Gray,
    #[raw = "grn"]
    Green,
    #[raw = "hzl"]
    Hazel,
    #[raw = "oth"]
    Other,
}

/// `key:value`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
    pub key: FieldKey,
    pub value: String,
}

/// Fields separated by spaces or newlines, values still unchecked
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PassportRecord {
    pub fields: Vec<Field>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Height {
    Centimeters(u32),
    Inches(u32),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

/// A record whose values all passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passport {
    pub birth_year: u16,
    pub issue_year: u16,
    pub expiration_year: u16,
    pub height: Height,
    pub hair_color: Rgb,
    pub eye_color: EyeColor,
    pub passport_id: String,
    pub country_id: Option<String>,
}

impl Parseable for Field {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let key = cursor.parse::<FieldKey>()?;
        cursor.expect_literal(":")?;
        let value = cursor.consume_while(|c| !c.is_whitespace());
        if value.is_empty() {
            return Err(ParseError::unexpected("field value", cursor.remaining()));
        }
        Ok(Self {
            key,
            value: value.to_string(),
        })
    }

    fn render(&self) -> String {
        format!("{}:{}", self.key.render(), self.value)
    }
}

impl Parseable for PassportRecord {
    fn parse_one(cursor: &mut Cursor<'_>) -> Result<Self, ParseError> {
        let fields = cursor.parse_all(&[" ", "\n"], &[])?;
        Ok(Self { fields })
    }

    fn render(&self) -> String {
        self.fields
            .iter()
            .map(Parseable::render)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl PassportRecord {
    fn value(&self, key: FieldKey) -> Option<&str> {
        self.fields
            .iter()
            .find(|field| field.key == key)
            .map(|field| field.value.as_str())
    }

    fn required(&self, key: FieldKey) -> anyhow::Result<&str> {
        self.value(key)
            .ok_or_else(|| anyhow!("missing field {}", key.render()))
    }

    pub fn has_mandatory_fields(&self) -> bool {
        FieldKey::MANDATORY
            .iter()
            .all(|&key| self.value(key).is_some())
    }

    /// Check every mandatory value against its rule
    pub fn validate(&self) -> anyhow::Result<Passport> {
        Ok(Passport {
            birth_year: parse_year(self.required(FieldKey::BirthYear)?, 1920..=2002)?,
            issue_year: parse_year(self.required(FieldKey::IssueYear)?, 2010..=2020)?,
            expiration_year: parse_year(self.required(FieldKey::ExpirationYear)?, 2020..=2030)?,
            height: parse_height(self.required(FieldKey::Height)?)?,
            hair_color: parse_hair_color(self.required(FieldKey::HairColor)?)?,
            eye_color: EyeColor::parse_str(self.required(FieldKey::EyeColor)?)?,
            passport_id: parse_passport_id(self.required(FieldKey::PassportId)?)?,
            country_id: self.value(FieldKey::CountryId).map(str::to_string),
        })
    }
}

/// Exactly four digits within `valid`
pub fn parse_year(value: &str, valid: RangeInclusive<u16>) -> anyhow::Result<u16> {
    ensure!(
        value.len() == 4 && value.chars().all(|c| c.is_ascii_digit()),
        "year {value:?} must be four digits"
    );
    let year = value.parse::<u16>()?;
    ensure!(valid.contains(&year), "year {year} not in {valid:?}");
    Ok(year)
}

/// A number followed by `cm` (150 to 193) or `in` (59 to 76)
pub fn parse_height(value: &str) -> anyhow::Result<Height> {
    let mut cursor = Cursor::new(value);
    let amount = cursor
        .consume_integer::<u32>()
        .with_context(|| format!("height {value:?}"))?;
    let (height, valid) = match cursor.remaining() {
        "cm" => (Height::Centimeters(amount), 150..=193),
        "in" => (Height::Inches(amount), 59..=76),
        unit => bail!("height unit {unit:?} is neither cm nor in"),
    };
    ensure!(valid.contains(&amount), "height {value} not in {valid:?}");
    Ok(height)
}

/// `#` followed by exactly six hex digits
pub fn parse_hair_color(value: &str) -> anyhow::Result<Rgb> {
    let mut cursor = Cursor::new(value);
    cursor.expect_literal("#")?;
    let mut channel = || -> anyhow::Result<u8> {
        Ok(u8::try_from(cursor.consume_fixed_width_hex(2)?)?)
    };
    let rgb = Rgb {
        red: channel()?,
        green: channel()?,
        blue: channel()?,
    };
    ensure!(cursor.is_at_end(), "hair color {value:?} has trailing text");
    Ok(rgb)
}

/// Nine digits, leading zeroes included
pub fn parse_passport_id(value: &str) -> anyhow::Result<String> {
    ensure!(
        value.len() == 9 && value.chars().all(|c| c.is_ascii_digit()),
        "passport id {value:?} must be nine digits"
    );
    Ok(value.to_string())
}

impl DaySolver for Solver {
    type Input = Elements<PassportRecord, BlankLine>;

    fn new(input: Self::Input) -> Result<Self, ParseError> {
        Ok(Self {
            records: input.into_inner(),
        })
    }

    fn solve_part1(&self) -> Result<String, SolveError> {
        let complete = self
            .records
            .iter()
            .filter(|record| record.has_mandatory_fields())
            .count();
        Ok(complete.to_string())
    }

    fn solve_part2(&self) -> Result<String, SolveError> {
        let valid = self
            .records
            .iter()
            .filter(|record| match record.validate() {
                Ok(_) => true,
                Err(err) => {
                    tracing::trace!("rejected passport: {err:#}");
                    false
                }
            })
            .count();
        Ok(valid.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn field_key() -> impl Strategy<Value = FieldKey> {
        let mut keys = FieldKey::MANDATORY.to_vec();
        keys.push(FieldKey::CountryId);
        prop::sample::select(keys)
    }

    fn field() -> impl Strategy<Value = Field> {
        (field_key(), "[a-z0-9#:]{1,10}").prop_map(|(key, value)| Field { key, value })
    }

    proptest! {
        #[test]
        fn prop_record_round_trip(fields in prop::collection::vec(field(), 1..9)) {
            let record = PassportRecord { fields };
            prop_assert_eq!(PassportRecord::parse_str(&record.render()).unwrap(), record);
        }

        #[test]
        fn prop_eye_color_round_trip(color in prop::sample::select(vec![
            EyeColor::Amber,
            EyeColor::Blue,
            EyeColor::Brown,
            EyeColor::Gray,
            EyeColor::Green,
            EyeColor::Hazel,
            EyeColor::Other,
        ])) {
            prop_assert_eq!(EyeColor::parse_str(&color.render()).unwrap(), color);
        }
    }

    const SAMPLE: &str = "\
ecl:gry pid:860033327 eyr:2020 hcl:#fffffd
byr:1937 iyr:2017 cid:147 hgt:183cm

iyr:2013 ecl:amb cid:350 eyr:2023 pid:028048884
hcl:#cfa07d byr:1929

hcl:#ae17e1 iyr:2013
eyr:2024
ecl:brn pid:760753108 byr:1931
hgt:179cm

hcl:#cfa07d eyr:2025 pid:166559648
iyr:2011 ecl:brn hgt:59in
";

    const INVALID: &str = "\
eyr:1972 cid:100
hcl:#18171d ecl:amb hgt:170 pid:186cm iyr:2018 byr:1926

iyr:2019
hcl:#602927 eyr:1967 hgt:170cm
ecl:grn pid:012533040 byr:1946

hcl:dab227 iyr:2012
ecl:brn hgt:182cm pid:021572410 eyr:2020 byr:1992 cid:277

hgt:59cm ecl:zzz
eyr:2038 hcl:74454a iyr:2023
pid:3556412378 byr:2007
";

    const VALID: &str = "\
pid:087499704 hgt:74in ecl:grn iyr:2012 eyr:2030 byr:1980
hcl:#623a2f

eyr:2029 ecl:blu cid:129 byr:1989
iyr:2014 pid:896056539 hcl:#a97842 hgt:165cm

hcl:#888785
hgt:164cm byr:2001 iyr:2015 cid:88
pid:545766238 ecl:hzl
eyr:2022

iyr:2010 hgt:158cm hcl:#b6652a ecl:blu byr:1944 eyr:2021 pid:093154719
";

    #[test]
    fn test_records_span_lines() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.records.len(), 4);
        assert_eq!(solver.records[0].fields.len(), 8);
        assert_eq!(solver.records[0].fields[0].key, FieldKey::EyeColor);
        assert_eq!(solver.records[2].value(FieldKey::Height), Some("179cm"));
    }

    #[test]
    fn test_part1() {
        let solver = Solver::from_input(SAMPLE).unwrap();
        assert_eq!(solver.solve_part1().unwrap(), "2");
    }

    #[test]
    fn test_part2() {
        let invalid = Solver::from_input(INVALID).unwrap();
        assert_eq!(invalid.solve_part2().unwrap(), "0");
        let valid = Solver::from_input(VALID).unwrap();
        assert_eq!(valid.solve_part2().unwrap(), "4");
    }

    #[test]
    fn test_unknown_key_fails_the_record() {
        let err = Solver::from_input("byr:1937 xyz:1\n").err().unwrap();
        assert!(matches!(err, ParseError::Element { index: 0, .. }));
    }

    #[test]
    fn test_field_rules() {
        assert!(parse_year("2002", 1920..=2002).is_ok());
        assert!(parse_year("2003", 1920..=2002).is_err());
        assert!(parse_year("02002", 1920..=2002).is_err());

        assert_eq!(parse_height("60in").unwrap(), Height::Inches(60));
        assert_eq!(parse_height("190cm").unwrap(), Height::Centimeters(190));
        assert!(parse_height("190in").is_err());
        assert!(parse_height("190").is_err());

        assert_eq!(
            parse_hair_color("#123abc").unwrap(),
            Rgb {
                red: 0x12,
                green: 0x3a,
                blue: 0xbc
            }
        );
        assert!(parse_hair_color("#123abz").is_err());
        assert!(parse_hair_color("123abc").is_err());
        assert!(parse_hair_color("#123abcd").is_err());

        assert_eq!(EyeColor::parse_str("brn").unwrap(), EyeColor::Brown);
        assert!(EyeColor::parse_str("wat").is_err());

        assert!(parse_passport_id("000000001").is_ok());
        assert!(parse_passport_id("0123456789").is_err());
    }
}
