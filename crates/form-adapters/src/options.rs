//! Listas de opciones compartidas por varios wizards.

use form_core::SelectOption;
use form_domain::{ClassLevel, Competition};

pub fn gender_options() -> Vec<SelectOption> {
    vec![SelectOption::new("Male", "Male"),
         SelectOption::new("Female", "Female"),
         SelectOption::new("Other", "Other")]
}

pub fn yes_no_options() -> Vec<SelectOption> {
    vec![SelectOption::new("Yes", "Yes"), SelectOption::new("No", "No")]
}

/// Cursos elegibles para una competencia. Quiz y póster admiten sólo 8vo a
/// 10mo; el resto hasta 12vo.
pub fn class_options_for(competition: Competition) -> Vec<SelectOption> {
    let levels: &[ClassLevel] = match competition {
        Competition::Quiz | Competition::Poster => &[ClassLevel::Std8, ClassLevel::Std9, ClassLevel::Std10],
        _ => &[ClassLevel::Std8, ClassLevel::Std9, ClassLevel::Std10, ClassLevel::Std11, ClassLevel::Std12],
    };
    levels.iter().map(|l| SelectOption::new(l.label(), l.label())).collect()
}

pub fn rating_options() -> Vec<SelectOption> {
    (1..=5).map(|n| SelectOption::new(n.to_string(), n.to_string())).collect()
}
