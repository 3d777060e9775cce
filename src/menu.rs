//! Daily menu model and day selection.
//!
//! The menu endpoint returns an array of kitchen blocks, each nesting
//! `menuTypes → menus → days → mealoptions → menuItems`. Dates ride along as
//! `YYYYMMDD` integers. Like the catalog, this is third-party data: unknown
//! dates and empty days are skipped rather than treated as failures.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Kitchen header plus its menus, as returned by the menu endpoint.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct KitchenMenu {
    pub kitchen_name: String,
    pub info: String,
    pub menu_types: Vec<MenuType>,
}

/// One menu category of a kitchen ("Lounas", "Kasvislounas", ...).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuType {
    pub menu_type_name: String,
    pub menus: Vec<Menu>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Menu {
    pub menu_name: String,
    pub days: Vec<MenuDay>,
}

/// One calendar day of a menu. `date` is YYYYMMDD.
///
/// The wire name for the options list really is all-lowercase `mealoptions`,
/// unlike every other field in the payload.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MenuDay {
    pub date: u32,
    #[serde(rename = "mealoptions")]
    pub meal_options: Vec<MealOption>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MealOption {
    pub name: String,
    pub menu_items: Vec<MenuItem>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MenuItem {
    pub name: String,
    pub portion_size: f64,
    /// HTML-ish free text from the service; rendered as-is.
    pub ingredients: String,
}

const WEEKDAYS_FI: [&str; 7] = [
    "Maanantai",
    "Tiistai",
    "Keskiviikko",
    "Torstai",
    "Perjantai",
    "Lauantai",
    "Sunnuntai",
];

/// Parse a YYYYMMDD menu date. `None` for nonsense like 20261332.
pub fn parse_menu_date(date: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt((date / 10_000) as i32, date / 100 % 100, date % 100)
}

/// The inverse of [`parse_menu_date`].
pub fn menu_date_key(date: NaiveDate) -> u32 {
    date.year() as u32 * 10_000 + date.month() * 100 + date.day()
}

/// Finnish weekday heading: `"Maanantai 03.02"`. Falls back to the raw
/// number when the date does not parse.
pub fn format_menu_date(date: u32) -> String {
    match parse_menu_date(date) {
        Some(day) => format!(
            "{} {:02}.{:02}",
            WEEKDAYS_FI[day.weekday().num_days_from_monday() as usize],
            day.day(),
            day.month()
        ),
        None => date.to_string(),
    }
}

/// The day list of the first menu of the first menu type, which is the one
/// the service fills for every kitchen. Empty slice when the nesting is
/// missing at any level.
pub fn menu_days(menu_types: &[MenuType]) -> &[MenuDay] {
    menu_types
        .first()
        .and_then(|menu_type| menu_type.menus.first())
        .map(|menu| menu.days.as_slice())
        .unwrap_or(&[])
}

/// Days worth showing: everything from yesterday onward, so lunch stays
/// visible just after midnight. Unparseable dates are dropped.
pub fn available_days<'a>(days: &'a [MenuDay], today: NaiveDate) -> Vec<&'a MenuDay> {
    let cutoff = today.checked_sub_days(Days::new(1)).unwrap_or(today);
    days.iter()
        .filter(|day| parse_menu_date(day.date).is_some_and(|date| date >= cutoff))
        .collect()
}

/// Find a specific day across the primary menu.
pub fn day_for(menu_types: &[MenuType], date: u32) -> Option<&MenuDay> {
    menu_days(menu_types).iter().find(|day| day.date == date)
}

/// Compact one-line summary of today's food: the first two item names of the
/// first meal option, joined with `" & "`. `None` when today has no menu or
/// the menu has no named items (the UI renders that as "Ei ruokaa").
pub fn todays_summary(menu_types: &[MenuType], today: NaiveDate) -> Option<String> {
    let day = day_for(menu_types, menu_date_key(today))?;
    let option = day.meal_options.first()?;

    let mut names = option
        .menu_items
        .iter()
        .map(|item| item.name.as_str())
        .filter(|name| !name.is_empty());
    let first = names.next()?;
    Some(match names.next() {
        Some(second) => format!("{} & {}", first, second),
        None => first.to_string(),
    })
}
