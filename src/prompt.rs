use crate::request::RecipeRequest;

/// The output-shape contract appended to every prompt: the exact field
/// names, types, optionality and units the model must produce.
///
/// Loaded from `contract.txt` at compile time using the `include_str!`
/// macro, making it easy to edit without dealing with Rust string syntax.
pub const OUTPUT_CONTRACT: &str = include_str!("contract.txt");

/// Instruction template for a request without details.
const TEMPLATE_NAME_ONLY: &str = "Busque uma receita de \"{{name}}\" e me devolva em um código JSON, sem quebra de linha, sem formatação, nesse formato (em português)";

/// Instruction template for a request that carries details.
const TEMPLATE_WITH_DETAILS: &str = "Busque uma receita de \"{{name}}\", considerando \"{{details}}\" e me devolva em um código JSON, sem quebra de linha, sem formatação, nesse formato (em português)";

/// Build the full prompt for a validated request.
///
/// Placeholder substitution is a literal first-occurrence replace, with no
/// escaping of the request text. Placeholder-like text inside the request
/// is an accepted limitation and left alone.
pub fn build_prompt(request: &RecipeRequest) -> String {
    let instruction = match request.details() {
        Some(details) => TEMPLATE_WITH_DETAILS
            .replacen("{{name}}", request.name(), 1)
            .replacen("{{details}}", details, 1),
        None => TEMPLATE_NAME_ONLY.replacen("{{name}}", request.name(), 1),
    };

    format!("{instruction}\n\n{OUTPUT_CONTRACT}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{validate, FormInput};

    fn request(name: &str, details: Option<&str>) -> RecipeRequest {
        let mut input = FormInput::new(name);
        if let Some(details) = details {
            input = input.with_details(details);
        }
        validate(&input).unwrap()
    }

    #[test]
    fn test_contract_is_embedded() {
        assert!(OUTPUT_CONTRACT.contains("title: string;"));
        assert!(OUTPUT_CONTRACT.contains("preparation_time"));
        assert!(OUTPUT_CONTRACT.contains("ingredients: string[];"));
        assert!(OUTPUT_CONTRACT.contains("'kcal'"));
    }

    #[test]
    fn test_name_only_variant() {
        let prompt = build_prompt(&request("Brownie", None));
        assert!(prompt.contains("\"Brownie\""));
        assert!(!prompt.contains("considerando"));
        assert!(!prompt.contains("{{name}}"));
        assert!(prompt.ends_with(OUTPUT_CONTRACT));
    }

    #[test]
    fn test_details_variant() {
        let prompt = build_prompt(&request("Pizza", Some("sem gluten")));
        assert!(prompt.contains("\"Pizza\""));
        assert!(prompt.contains("considerando \"sem gluten\""));
        assert!(!prompt.contains("{{details}}"));
    }

    #[test]
    fn test_prompt_is_deterministic() {
        let request = request("Bolo de cenoura", Some("para 10 pessoas"));
        assert_eq!(build_prompt(&request), build_prompt(&request));
    }

    #[test]
    fn test_substitution_is_first_occurrence_only() {
        // A placeholder token inside the name survives: only the template's
        // own first occurrence is replaced.
        let prompt = build_prompt(&request("a {{name}} b", None));
        assert!(prompt.contains("a {{name}} b"));
    }

    #[test]
    fn test_contract_follows_a_blank_line() {
        let prompt = build_prompt(&request("Brownie", None));
        assert!(prompt.contains("(em português)\n\n{"));
    }
}
