//! Word wrapping for a fixed-width console.

/// Break `text` into lines of at most `width` characters.
///
/// Lines break at the last run of spaces that fits, and the run itself is
/// dropped. Existing newlines are kept. A word longer than the limit is
/// emitted whole on its own line.
pub fn word_wrap(text: &str, width: usize) -> String {
    text.split('\n')
        .flat_map(|line| wrap_line(line, width))
        .collect::<Vec<_>>()
        .join("\n")
}

fn wrap_line(line: &str, width: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = line;

    loop {
        let Some((cut, ch)) = rest.char_indices().nth(width) else {
            chunks.push(rest);
            break;
        };
        let window = &rest[..cut + ch.len_utf8()];
        match window.rfind(' ') {
            Some(space) if space > 0 => {
                chunks.push(rest[..space].trim_end_matches(' '));
                rest = rest[space..].trim_start_matches(' ');
            }
            _ => match rest[cut..].find(' ') {
                Some(offset) => {
                    let end = cut + offset;
                    chunks.push(&rest[..end]);
                    rest = rest[end..].trim_start_matches(' ');
                }
                None => {
                    chunks.push(rest);
                    break;
                }
            },
        }
    }
    chunks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_text_unchanged() {
        assert_eq!(word_wrap("Hello", 80), "Hello");
        assert_eq!(word_wrap("", 80), "");
    }

    #[test]
    fn exact_width_fits() {
        assert_eq!(word_wrap("aaa bbb", 7), "aaa bbb");
    }

    #[test]
    fn breaks_at_last_space() {
        assert_eq!(word_wrap("aaa bbb ccc", 7), "aaa bbb\nccc");
        assert_eq!(word_wrap("one two three four", 9), "one two\nthree\nfour");
    }

    #[test]
    fn drops_whole_run_of_spaces() {
        assert_eq!(word_wrap("aaa     bbb", 5), "aaa\nbbb");
    }

    #[test]
    fn long_word_emitted_whole() {
        assert_eq!(word_wrap("abcdefghij klm", 4), "abcdefghij\nklm");
        assert_eq!(word_wrap("abcdefghij", 4), "abcdefghij");
    }

    #[test]
    fn keeps_existing_newlines() {
        assert_eq!(word_wrap("first line\nsecond", 80), "first line\nsecond");
        assert_eq!(word_wrap("aa bb\ncc dd", 3), "aa\nbb\ncc\ndd");
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(word_wrap("éé ü", 4), "éé ü");
        assert_eq!(word_wrap("ééé üüü", 4), "ééé\nüüü");
    }
}
