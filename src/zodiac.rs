//! Western zodiac sign for a birth (month, day).

use chrono::{Datelike, NaiveDate};
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ZodiacInfo {
    pub name: &'static str,
    pub symbol: &'static str,
    pub date_range: &'static str,
}

const fn sign(name: &'static str, symbol: &'static str, date_range: &'static str) -> ZodiacInfo {
    ZodiacInfo {
        name,
        symbol,
        date_range,
    }
}

pub const SIGNS: [ZodiacInfo; 12] = [
    sign("Aquarius", "♒", "Jan 20 - Feb 18"),
    sign("Pisces", "♓", "Feb 19 - Mar 20"),
    sign("Aries", "♈", "Mar 21 - Apr 19"),
    sign("Taurus", "♉", "Apr 20 - May 20"),
    sign("Gemini", "♊", "May 21 - Jun 20"),
    sign("Cancer", "♋", "Jun 21 - Jul 22"),
    sign("Leo", "♌", "Jul 23 - Aug 22"),
    sign("Virgo", "♍", "Aug 23 - Sep 22"),
    sign("Libra", "♎", "Sep 23 - Oct 22"),
    sign("Scorpio", "♏", "Oct 23 - Nov 21"),
    sign("Sagittarius", "♐", "Nov 22 - Dec 21"),
    sign("Capricorn", "♑", "Dec 22 - Jan 19"),
];

/// Looks up the sign for `month` (1-12) and `day`. Both range ends are
/// inclusive; everything not matched earlier, i.e. Dec 22 - Jan 19, is
/// Capricorn.
pub fn zodiac_sign(month: u32, day: u32) -> ZodiacInfo {
    let index = match (month, day) {
        (1, 20..) | (2, ..=18) => 0,
        (2, 19..) | (3, ..=20) => 1,
        (3, 21..) | (4, ..=19) => 2,
        (4, 20..) | (5, ..=20) => 3,
        (5, 21..) | (6, ..=20) => 4,
        (6, 21..) | (7, ..=22) => 5,
        (7, 23..) | (8, ..=22) => 6,
        (8, 23..) | (9, ..=22) => 7,
        (9, 23..) | (10, ..=22) => 8,
        (10, 23..) | (11, ..=21) => 9,
        (11, 22..) | (12, ..=21) => 10,
        _ => 11,
    };
    SIGNS[index]
}

pub fn zodiac_for(date: NaiveDate) -> ZodiacInfo {
    zodiac_sign(date.month(), date.day())
}
