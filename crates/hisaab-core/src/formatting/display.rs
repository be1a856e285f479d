/// Swap internal operator symbols for keypad glyphs and normalise spacing:
/// one space around each binary operator, none inside operands, and unary
/// signs kept attached to the operand they prefix.
pub fn format_expression_for_display(expr: &str) -> String {
    let mut out = String::with_capacity(expr.len() + 8);
    let mut after_operand = false;

    for ch in expr.chars().filter(|c| !c.is_whitespace()) {
        match display_glyph(ch) {
            Some(op) if after_operand => {
                out.push(' ');
                out.push(op);
                out.push(' ');
                after_operand = false;
            }
            Some(op) => {
                out.push(op);
                after_operand = false;
            }
            None => {
                out.push(ch);
                after_operand = ch != '(';
            }
        }
    }

    out.truncate(out.trim_end().len());
    out
}

fn display_glyph(ch: char) -> Option<char> {
    match ch {
        '*' | 'x' | 'X' | '×' => Some('×'),
        '/' | '÷' => Some('÷'),
        '-' | '−' => Some('-'),
        '+' => Some('+'),
        _ => None,
    }
}
