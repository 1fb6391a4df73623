/// Registration snippet for fish.
///
/// Defines a function that queries the completed command with
/// `--compfish --compgen` and the current line, then binds it with
/// `complete -f`.
pub fn registration_script(func: &str, command: &str) -> String {
    format!(
        r#"function {func}
    {command} --compfish --compgen (commandline -pb)
end
complete -f -c {command} -a '({func})'"#
    )
}
