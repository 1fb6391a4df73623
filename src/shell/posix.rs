/// Shared registration snippet for bash and zsh.
///
/// The zsh branch is taken when the `compdef` builtin exists; otherwise the
/// bash branch registers through `complete -o nospace`. Both branches
/// re-invoke the completed command with `--compzsh`/`--compbash --compgen`
/// and the current line, expecting newline-separated candidates on stdout.
pub fn registration_script(func: &str, command: &str) -> String {
    format!(
        r#"if type compdef &>/dev/null; then
    {func}() {{
        local IFS=$'\n'
        compadd -Q -S '' -- `{command} --compzsh --compgen "${{BUFFER}}"`
    }}
    compdef {func} {command}
elif type complete &>/dev/null; then
    {func}() {{
        local IFS=$'\n'
        local cur prev nb_colon
        _get_comp_words_by_ref -n : cur prev
        nb_colon=$(grep -o ":" <<< "$COMP_LINE" | wc -l)
        COMPREPLY=( $(compgen -W '$({command} --compbash --compgen "${{COMP_LINE}}")' -- "$cur") )
        __ltrim_colon_completions "$cur"
    }}
    complete -o nospace -F {func} {command}
fi"#
    )
}
