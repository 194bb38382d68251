// src/nya.rs

//! The virtual assistant's entire vocabulary.

use rand::Rng;

const FIRST_SYLLABLE: &str = "Nya";
const SYLLABLE: &str = "nya";

/// Generates a sentence of cat speech using the thread-local generator.
pub fn generate_nya() -> String {
    let mut rng = rand::rng();
    generate_nya_with(|| rng.random::<f64>())
}

/// Generates a sentence of cat speech from a source of uniform draws in `[0, 1)`.
///
/// The sentence is up to four clauses joined by `", "` and always ends in
/// `"."`. Clause, word and syllable counts are products of draws, so short
/// sentences and empty words are common. Only the first syllable of the whole
/// sentence is capitalized.
pub fn generate_nya_with(mut next: impl FnMut() -> f64) -> String {
    let clauses = next() * next() * 4.0;
    let mut sentence = Vec::new();
    let mut first_syllable = true;

    let mut c = 0.0;
    while c < clauses {
        let clause_length = next() * 5.0 + 1.0;
        let mut clause = Vec::new();

        let mut w = 0.0;
        while w < clause_length {
            let word_length = next() * next() * next() * 3.0;
            let mut word = String::new();

            let mut s = 0.0;
            while s < word_length {
                if first_syllable {
                    word.push_str(FIRST_SYLLABLE);
                    first_syllable = false;
                } else {
                    word.push_str(SYLLABLE);
                }
                s += 1.0;
            }

            clause.push(word);
            w += 1.0;
        }

        sentence.push(clause.join(" "));
        c += 1.0;
    }

    sentence.join(", ") + "."
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_constant_zero_is_just_a_period() {
        assert_eq!(generate_nya_with(|| 0.0), ".");
    }

    #[test]
    fn test_near_one_is_the_longest_sentence() {
        let sentence = generate_nya_with(|| 0.999);
        let clauses: Vec<&str> = sentence.trim_end_matches('.').split(", ").collect();
        assert_eq!(clauses.len(), 4);
        for clause in &clauses {
            assert_eq!(clause.split(' ').count(), 6);
        }
        assert!(sentence.starts_with("Nyanyanya nyanyanya "));
        assert!(sentence.ends_with("nyanyanya."));
    }

    #[test]
    fn test_only_first_syllable_is_capitalized() {
        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let sentence = generate_nya_with(|| rng.random::<f64>());
            let caps = sentence.matches("Nya").count();
            assert!(caps <= 1, "{sentence:?}");
            if caps == 1 {
                assert_eq!(sentence.find(|ch: char| ch.is_alphabetic()), sentence.find("Nya"));
            }
        }
    }

    #[test]
    fn test_always_ends_with_period() {
        for _ in 0..500 {
            let sentence = generate_nya();
            assert!(sentence.ends_with('.'));
            assert!(sentence
                .chars()
                .all(|ch| matches!(ch, 'N' | 'n' | 'y' | 'a' | ' ' | ',' | '.')));
        }
    }

    #[test]
    fn test_draw_order() {
        // clauses: 0.5 * 0.5 * 4 = 1, one clause.
        // clause length: 0.0 * 5 + 1 = 1, one word.
        // word length: 1 * 1 * 0.5 * 3 = 1.5, two syllables.
        let mut draws = vec![0.5, 0.5, 0.0, 0.999_999, 0.999_999, 0.5].into_iter();
        let sentence = generate_nya_with(|| draws.next().unwrap_or(0.0));
        assert_eq!(sentence, "Nyanya.");
    }
}
