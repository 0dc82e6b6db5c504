use rand::Rng;
use rand::seq::SliceRandom;

/// Replaces HTML character references with the characters they stand for.
///
/// Text without references comes back unchanged, so decoding already decoded
/// text is a no-op. Sessions decode each field exactly once when questions
/// are ingested.
pub fn decode_entities(text: &str) -> String {
    html_escape::decode_html_entities(text).into_owned()
}

/// Uniformly shuffled copy of `items`; the input is left as is.
pub fn shuffle<T: Clone>(items: &[T]) -> Vec<T> {
    shuffle_with(items, &mut rand::thread_rng())
}

pub fn shuffle_with<T: Clone, R: Rng + ?Sized>(items: &[T], rng: &mut R) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn decodes_named_and_numeric_references() {
        assert_eq!(
            decode_entities("Who wrote &quot;Hamlet&quot;?"),
            "Who wrote \"Hamlet\"?"
        );
        assert_eq!(decode_entities("It&#039;s"), "It's");
        assert_eq!(decode_entities("Salt &amp; Pepper"), "Salt & Pepper");
        assert_eq!(decode_entities("&#x3C;tag&#x3E;"), "<tag>");
    }

    #[test]
    fn decoding_decoded_text_is_a_no_op() {
        for raw in [
            "Tom &amp; Jerry",
            "&quot;Quoted&quot; & more",
            "Plain text",
            "",
        ] {
            let once = decode_entities(raw);
            assert_eq!(decode_entities(&once), once, "input: {raw}");
        }
    }

    #[test]
    fn shuffle_is_a_permutation_and_leaves_input() {
        let items = vec!["a", "b", "c", "d"];
        let mut rng = StdRng::seed_from_u64(7);
        let shuffled = shuffle_with(&items, &mut rng);
        assert_eq!(items, vec!["a", "b", "c", "d"]);
        let mut sorted = shuffled.clone();
        sorted.sort();
        assert_eq!(sorted, items);
    }

    #[test]
    fn shuffle_handles_tiny_inputs() {
        let empty: Vec<u8> = Vec::new();
        assert!(shuffle(&empty).is_empty());
        assert_eq!(shuffle(&[42]), vec![42]);
    }

    #[test]
    fn shuffle_reaches_every_position() {
        let items = [0, 1, 2];
        let mut rng = StdRng::seed_from_u64(1);
        let mut first_seen = [false; 3];
        for _ in 0..200 {
            first_seen[shuffle_with(&items, &mut rng)[0]] = true;
        }
        assert!(first_seen.iter().all(|seen| *seen));
    }
}
