pub fn print_banner(version: &str) {
    let banner = format!(
        r#"
 ██████╗ ███████╗███████╗██╗
 ██╔══██╗██╔════╝██╔════╝██║
 ██████╔╝█████╗  █████╗  ██║       reel
 ██╔══██╗██╔══╝  ██╔══╝  ██║       v{}
 ██║  ██║███████╗███████╗███████╗
 ╚═╝  ╚═╝╚══════╝╚══════╝╚══════╝
"#,
        version
    );

    tracing::info!("{}", banner);
}
