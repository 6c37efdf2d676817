mod descriptor;
mod enumerated;
mod parameter;

#[cfg(test)]
pub(crate) mod test {
    // Break the token stream onto one line per chained call, for readable expectations.
    pub(crate) fn simple_format(rust_str: String) -> String {
        rust_str.replace(" . ", "\n.")
    }
}
