use tictactoe_engine::Position;

/// Parses a human move entered as two 1-based integers separated by
/// whitespace, e.g. "2 3". Both coordinates must be in [1, 3].
pub fn parse_move(input: &str) -> Result<Position, String> {
    let tokens: Vec<&str> = input.split_whitespace().collect();
    if tokens.len() != 2 {
        return Err("Expected row and column as two numbers".to_string());
    }

    let row = parse_coordinate(tokens[0], "Row")?;
    let col = parse_coordinate(tokens[1], "Column")?;

    Ok(Position::new(row - 1, col - 1))
}

fn parse_coordinate(token: &str, name: &str) -> Result<usize, String> {
    let value: usize = token
        .parse()
        .map_err(|_| format!("{} must be a number", name))?;

    if !(1..=3).contains(&value) {
        return Err(format!("{} must be between 1 and 3", name));
    }

    Ok(value)
}
