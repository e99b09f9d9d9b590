/// Replaces every digit before the last 4 characters with `*`. Inputs of 4
/// characters or fewer are masked digit-by-digit. Non-digit characters pass
/// through unchanged, so masking an already-masked number is a no-op.
pub fn mask_card_number(card_number: &str) -> String {
    let chars: Vec<char> = card_number.chars().collect();
    let masked_len = if chars.len() <= 4 {
        chars.len()
    } else {
        chars.len() - 4
    };

    chars
        .iter()
        .enumerate()
        .map(|(i, &c)| {
            if i < masked_len && c.is_ascii_digit() {
                '*'
            } else {
                c
            }
        })
        .collect()
}
