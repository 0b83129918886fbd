// User-facing texts

use crate::error::TaskError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "en")]
    En,
    #[serde(rename = "pt-BR")]
    PtBr,
}

impl FromStr for Locale {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" => Ok(Locale::En),
            "pt-BR" | "pt-br" | "pt" => Ok(Locale::PtBr),
            other => Err(TaskError::UnknownLocale(other.to_string())),
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Locale::En => write!(f, "en"),
            Locale::PtBr => write!(f, "pt-BR"),
        }
    }
}

/// Texts shown by the screen
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Messages {
    pub duplicate_title: String,
    pub duplicate_body: String,
    pub remove_title: String,
    pub remove_body: String,
    pub confirm: String,
    pub cancel: String,
    pub empty_list: String,
    counter_one: String,
    counter_many: String,
}

impl Messages {
    pub fn for_locale(locale: Locale) -> Self {
        match locale {
            Locale::En => Self {
                duplicate_title: "Task already registered".to_string(),
                duplicate_body: "You cannot register a task with the same name".to_string(),
                remove_title: "Remove item".to_string(),
                remove_body: "Are you sure you want to remove this item?".to_string(),
                confirm: "Confirm".to_string(),
                cancel: "Cancel".to_string(),
                empty_list: "No tasks yet".to_string(),
                counter_one: "You have {} task".to_string(),
                counter_many: "You have {} tasks".to_string(),
            },
            Locale::PtBr => Self {
                duplicate_title: "Task já cadastrada".to_string(),
                duplicate_body: "Você não pode cadastrar uma task com o mesmo nome".to_string(),
                remove_title: "Remover item".to_string(),
                remove_body: "Tem certeza que você deseja remover esse item?".to_string(),
                confirm: "Confirmar".to_string(),
                cancel: "Cancelar".to_string(),
                empty_list: "Nenhuma task ainda".to_string(),
                counter_one: "Você tem {} task".to_string(),
                counter_many: "Você tem {} tasks".to_string(),
            },
        }
    }

    /// Header line for the given task count
    pub fn counter(&self, count: usize) -> String {
        let template = if count == 1 { &self.counter_one } else { &self.counter_many };
        template.replace("{}", &count.to_string())
    }
}

impl Default for Messages {
    fn default() -> Self {
        Self::for_locale(Locale::default())
    }
}
