//! fontinfo attribute assignment with per-attribute type coercion

use std::str::FromStr;

use log::debug;
use norad::FontInfo;
use plist::{Dictionary, Value};

use crate::{Error, Result};

/// How a command-line string is turned into a fontinfo value
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InfoKind {
    String,
    Integer,
    /// Integer or float
    Number,
    Bool,
    /// `[1, 2, 3]`
    IntegerList,
    /// `[-10, 0, 480.5]`
    NumberList,
    /// Set bit indices, `[0, 3]`, each at most the given bit
    Bitlist(u32),
    /// Dictionaries or lists of dictionaries
    Structured,
}

/// UFO 3 fontinfo.plist attributes and their kinds
pub const INFO_ATTRIBUTES: &[(&str, InfoKind)] = &[
    ("ascender", InfoKind::Number),
    ("capHeight", InfoKind::Number),
    ("copyright", InfoKind::String),
    ("descender", InfoKind::Number),
    ("familyName", InfoKind::String),
    ("guidelines", InfoKind::Structured),
    ("italicAngle", InfoKind::Number),
    ("macintoshFONDFamilyID", InfoKind::Integer),
    ("macintoshFONDName", InfoKind::String),
    ("note", InfoKind::String),
    ("openTypeGaspRangeRecords", InfoKind::Structured),
    ("openTypeHeadCreated", InfoKind::String),
    ("openTypeHeadFlags", InfoKind::Bitlist(15)),
    ("openTypeHeadLowestRecPPEM", InfoKind::Integer),
    ("openTypeHheaAscender", InfoKind::Integer),
    ("openTypeHheaCaretOffset", InfoKind::Integer),
    ("openTypeHheaCaretSlopeRise", InfoKind::Integer),
    ("openTypeHheaCaretSlopeRun", InfoKind::Integer),
    ("openTypeHheaDescender", InfoKind::Integer),
    ("openTypeHheaLineGap", InfoKind::Integer),
    ("openTypeNameCompatibleFullName", InfoKind::String),
    ("openTypeNameDescription", InfoKind::String),
    ("openTypeNameDesigner", InfoKind::String),
    ("openTypeNameDesignerURL", InfoKind::String),
    ("openTypeNameLicense", InfoKind::String),
    ("openTypeNameLicenseURL", InfoKind::String),
    ("openTypeNameManufacturer", InfoKind::String),
    ("openTypeNameManufacturerURL", InfoKind::String),
    ("openTypeNamePreferredFamilyName", InfoKind::String),
    ("openTypeNamePreferredSubfamilyName", InfoKind::String),
    ("openTypeNameRecords", InfoKind::Structured),
    ("openTypeNameSampleText", InfoKind::String),
    ("openTypeNameUniqueID", InfoKind::String),
    ("openTypeNameVersion", InfoKind::String),
    ("openTypeNameWWSFamilyName", InfoKind::String),
    ("openTypeNameWWSSubfamilyName", InfoKind::String),
    ("openTypeOS2CodePageRanges", InfoKind::Bitlist(63)),
    ("openTypeOS2FamilyClass", InfoKind::IntegerList),
    ("openTypeOS2Panose", InfoKind::IntegerList),
    ("openTypeOS2Selection", InfoKind::Bitlist(15)),
    ("openTypeOS2StrikeoutPosition", InfoKind::Integer),
    ("openTypeOS2StrikeoutSize", InfoKind::Integer),
    ("openTypeOS2SubscriptXOffset", InfoKind::Integer),
    ("openTypeOS2SubscriptXSize", InfoKind::Integer),
    ("openTypeOS2SubscriptYOffset", InfoKind::Integer),
    ("openTypeOS2SubscriptYSize", InfoKind::Integer),
    ("openTypeOS2SuperscriptXOffset", InfoKind::Integer),
    ("openTypeOS2SuperscriptXSize", InfoKind::Integer),
    ("openTypeOS2SuperscriptYOffset", InfoKind::Integer),
    ("openTypeOS2SuperscriptYSize", InfoKind::Integer),
    ("openTypeOS2Type", InfoKind::Bitlist(15)),
    ("openTypeOS2TypoAscender", InfoKind::Integer),
    ("openTypeOS2TypoDescender", InfoKind::Integer),
    ("openTypeOS2TypoLineGap", InfoKind::Integer),
    ("openTypeOS2UnicodeRanges", InfoKind::Bitlist(127)),
    ("openTypeOS2VendorID", InfoKind::String),
    ("openTypeOS2WeightClass", InfoKind::Integer),
    ("openTypeOS2WidthClass", InfoKind::Integer),
    ("openTypeOS2WinAscent", InfoKind::Integer),
    ("openTypeOS2WinDescent", InfoKind::Integer),
    ("openTypeVheaCaretOffset", InfoKind::Integer),
    ("openTypeVheaCaretSlopeRise", InfoKind::Integer),
    ("openTypeVheaCaretSlopeRun", InfoKind::Integer),
    ("openTypeVheaVertTypoAscender", InfoKind::Integer),
    ("openTypeVheaVertTypoDescender", InfoKind::Integer),
    ("openTypeVheaVertTypoLineGap", InfoKind::Integer),
    ("postscriptBlueFuzz", InfoKind::Number),
    ("postscriptBlueScale", InfoKind::Number),
    ("postscriptBlueShift", InfoKind::Number),
    ("postscriptBlueValues", InfoKind::NumberList),
    ("postscriptDefaultCharacter", InfoKind::String),
    ("postscriptDefaultWidthX", InfoKind::Number),
    ("postscriptFamilyBlues", InfoKind::NumberList),
    ("postscriptFamilyOtherBlues", InfoKind::NumberList),
    ("postscriptFontName", InfoKind::String),
    ("postscriptForceBold", InfoKind::Bool),
    ("postscriptFullName", InfoKind::String),
    ("postscriptIsFixedPitch", InfoKind::Bool),
    ("postscriptNominalWidthX", InfoKind::Number),
    ("postscriptOtherBlues", InfoKind::NumberList),
    ("postscriptSlantAngle", InfoKind::Number),
    ("postscriptStemSnapH", InfoKind::NumberList),
    ("postscriptStemSnapV", InfoKind::NumberList),
    ("postscriptUnderlinePosition", InfoKind::Number),
    ("postscriptUnderlineThickness", InfoKind::Number),
    ("postscriptUniqueID", InfoKind::Integer),
    ("postscriptWeightName", InfoKind::String),
    ("postscriptWindowsCharacterSet", InfoKind::Integer),
    ("styleMapFamilyName", InfoKind::String),
    ("styleMapStyleName", InfoKind::String),
    ("styleName", InfoKind::String),
    ("trademark", InfoKind::String),
    ("unitsPerEm", InfoKind::Number),
    ("versionMajor", InfoKind::Integer),
    ("versionMinor", InfoKind::Integer),
    ("woffMajorVersion", InfoKind::Integer),
    ("woffMetadataCopyright", InfoKind::Structured),
    ("woffMetadataCredits", InfoKind::Structured),
    ("woffMetadataDescription", InfoKind::Structured),
    ("woffMetadataExtensions", InfoKind::Structured),
    ("woffMetadataLicense", InfoKind::Structured),
    ("woffMetadataLicensee", InfoKind::Structured),
    ("woffMetadataTrademark", InfoKind::Structured),
    ("woffMetadataUniqueID", InfoKind::Structured),
    ("woffMetadataVendor", InfoKind::Structured),
    ("woffMinorVersion", InfoKind::Integer),
    ("xHeight", InfoKind::Number),
    ("year", InfoKind::Integer),
];

/// Look up the kind of a fontinfo attribute by its UFO name
pub fn info_kind(key: &str) -> Option<InfoKind> {
    INFO_ATTRIBUTES.iter().find(|(name, _)| *name == key).map(|(_, kind)| *kind)
}

/// A single `key=value` fontinfo edit. A `None` value clears the attribute.
#[derive(Debug, Clone, PartialEq)]
pub struct InfoAssignment {
    pub key: String,
    pub value: Option<Value>,
}

impl InfoAssignment {
    /// Parse `key=value`, coercing the value to the attribute's type.
    ///
    /// An empty value (`key=`) clears the attribute.
    pub fn parse(s: &str) -> Result<Self> {
        let (key, raw) = s.split_once('=').ok_or_else(|| Error::InvalidAssignment(s.into()))?;
        let key = key.trim();
        let kind = info_kind(key).ok_or_else(|| Error::UnknownInfoAttribute(key.into()))?;
        if kind == InfoKind::Structured {
            return Err(Error::UnsupportedInfoAttribute(key.into()));
        }
        if raw.is_empty() {
            return Ok(Self { key: key.into(), value: None });
        }
        let value = coerce(kind, raw).map_err(|reason| Error::InvalidInfoValue {
            key: key.into(),
            value: raw.into(),
            reason,
        })?;
        Ok(Self { key: key.into(), value: Some(value) })
    }
}

impl FromStr for InfoAssignment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

fn coerce(kind: InfoKind, raw: &str) -> std::result::Result<Value, String> {
    let raw_trimmed = raw.trim();
    match kind {
        InfoKind::String => Ok(Value::String(raw.to_owned())),
        InfoKind::Integer => parse_integer(raw_trimmed),
        InfoKind::Number => parse_number(raw_trimmed),
        InfoKind::Bool => match raw_trimmed.to_ascii_lowercase().as_str() {
            "true" | "yes" | "1" => Ok(Value::Boolean(true)),
            "false" | "no" | "0" => Ok(Value::Boolean(false)),
            _ => Err("expected true or false".into()),
        },
        InfoKind::IntegerList => parse_list(raw_trimmed, parse_integer),
        InfoKind::NumberList => parse_list(raw_trimmed, parse_number),
        InfoKind::Bitlist(max_bit) => parse_list(raw_trimmed, |item| {
            let bit: u32 = item.parse().map_err(|_| format!("'{item}' is not a bit number"))?;
            if bit > max_bit {
                return Err(format!("bit {bit} is out of range 0-{max_bit}"));
            }
            Ok(Value::Integer(u64::from(bit).into()))
        }),
        InfoKind::Structured => Err("structured values are not supported".into()),
    }
}

fn parse_integer(item: &str) -> std::result::Result<Value, String> {
    item.parse::<i64>()
        .map(|i| Value::Integer(i.into()))
        .map_err(|_| format!("'{item}' is not an integer"))
}

fn parse_number(item: &str) -> std::result::Result<Value, String> {
    parse_integer(item).or_else(|_| {
        item.parse::<f64>()
            .ok()
            .filter(|f| f.is_finite())
            .map(Value::Real)
            .ok_or_else(|| format!("'{item}' is not a number"))
    })
}

/// Parse `[a, b, c]`, brackets optional
fn parse_list(
    raw: &str,
    item: impl Fn(&str) -> std::result::Result<Value, String>,
) -> std::result::Result<Value, String> {
    let inner = raw.strip_prefix('[').and_then(|r| r.strip_suffix(']')).unwrap_or(raw).trim();
    if inner.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    inner.split(',').map(|i| item(i.trim())).collect::<std::result::Result<_, _>>().map(Value::Array)
}

/// Apply fontinfo assignments in order.
///
/// The values go through norad's own fontinfo deserialization, so a value of
/// the right shape but out of range for the attribute is still rejected and
/// `info` is left unchanged.
pub fn apply_info(info: &mut FontInfo, assignments: &[InfoAssignment]) -> Result<()> {
    if assignments.is_empty() {
        return Ok(());
    }
    let mut dict = match plist::to_value(&*info)? {
        Value::Dictionary(dict) => dict,
        _ => Dictionary::new(),
    };
    for assignment in assignments {
        match &assignment.value {
            Some(value) => {
                debug!("fontinfo {} = {value:?}", assignment.key);
                dict.insert(assignment.key.clone(), value.clone());
            }
            None => {
                debug!("fontinfo {} cleared", assignment.key);
                dict.remove(&assignment.key);
            }
        }
    }
    *info = plist::from_value(&Value::Dictionary(dict))?;
    Ok(())
}
