// src/utils.rs

/// Title-case a word the way a label is printed: first letter of every
/// alphabetic run upper-cased, the rest lower-cased.
pub fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_word = false;
    for c in text.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

/// Human label for a skill category key (`programming_languages` -> `Programming Languages`)
pub fn skill_category_label(key: &str) -> String {
    title_case(&key.replace('_', " "))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("hello world"), "Hello World");
        assert_eq!(title_case("DEVOPS tools"), "Devops Tools");
        assert_eq!(title_case("ci/cd"), "Ci/Cd");
        assert_eq!(title_case(""), "");
    }

    #[test]
    fn test_skill_category_label() {
        assert_eq!(
            skill_category_label("programming_languages"),
            "Programming Languages"
        );
        assert_eq!(skill_category_label("cloud"), "Cloud");
        assert_eq!(skill_category_label("c++_and_rust"), "C++ And Rust");
    }
}
