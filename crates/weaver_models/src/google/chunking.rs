//! Splitting narration text into request-sized pieces.

/// Split `text` into chunks of at most `max_chars` characters.
///
/// Chunks break on whitespace. A single word longer than `max_chars` is cut
/// mid-word. Blank input yields no chunks.
///
/// # Examples
///
/// ```
/// use weaver_models::chunk_text;
///
/// let chunks = chunk_text("The robot walked into the forest.", 16);
/// assert_eq!(chunks, vec!["The robot walked", "into the forest."]);
/// ```
pub fn chunk_text(text: &str, max_chars: usize) -> Vec<String> {
    let max_chars = max_chars.max(1);
    let mut chunks = Vec::new();
    let mut current = String::new();
    let mut current_len = 0usize;

    for word in text.split_whitespace() {
        let word_len = word.chars().count();

        if word_len > max_chars {
            if !current.is_empty() {
                chunks.push(std::mem::take(&mut current));
                current_len = 0;
            }
            let chars: Vec<char> = word.chars().collect();
            for piece in chars.chunks(max_chars) {
                if piece.len() == max_chars {
                    chunks.push(piece.iter().collect());
                } else {
                    current = piece.iter().collect();
                    current_len = piece.len();
                }
            }
            continue;
        }

        let needed = if current.is_empty() {
            word_len
        } else {
            current_len + 1 + word_len
        };

        if needed > max_chars {
            chunks.push(std::mem::take(&mut current));
            current.push_str(word);
            current_len = word_len;
        } else {
            if !current.is_empty() {
                current.push(' ');
            }
            current.push_str(word);
            current_len = needed;
        }
    }

    if !current.is_empty() {
        chunks.push(current);
    }
    chunks
}
