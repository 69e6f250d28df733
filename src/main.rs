#[cfg(not(target_arch = "wasm32"))]
use std::process::ExitCode;

#[cfg(not(target_arch = "wasm32"))]
const USAGE: &str = "uso: class_scores_preview <student_id> [--base URL] [--out FILE] [--bg COLOR] [--text COLOR]";

#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Default, PartialEq)]
struct PreviewArgs {
    student_id: Option<i64>,
    base: Option<String>,
    out: Option<String>,
    bg: Option<String>,
    text: Option<String>,
}

#[cfg(not(target_arch = "wasm32"))]
fn parse_args(args: impl IntoIterator<Item = String>) -> Result<PreviewArgs, String> {
    let mut parsed = PreviewArgs::default();
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        let mut value_for = |flag: &str| {
            args.next()
                .ok_or_else(|| format!("falta valor para {flag}"))
        };
        match arg.as_str() {
            "--base" => parsed.base = Some(value_for("--base")?),
            "--out" => parsed.out = Some(value_for("--out")?),
            "--bg" => parsed.bg = Some(value_for("--bg")?),
            "--text" => parsed.text = Some(value_for("--text")?),
            other if parsed.student_id.is_none() => {
                let id = other
                    .parse::<i64>()
                    .map_err(|_| format!("id de alumno inválido: {other}"))?;
                parsed.student_id = Some(id);
            }
            other => return Err(format!("argumento inesperado: {other}")),
        }
    }

    Ok(parsed)
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> ExitCode {
    use std::rc::Rc;

    use class_scores::app::{DashboardController, ThemeSync};
    use class_scores::config::DashboardConfig;
    use class_scores::fetch::{BlockingTransport, resolve_api_base};
    use class_scores::logging;
    use class_scores::model::User;
    use class_scores::preview::{EnvHost, StaticPage};

    let args = match parse_args(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let config = DashboardConfig::load_embedded();
    logging::init(config.level_filter());

    let mut theme = EnvHost::theme_from_env();
    if args.bg.is_some() {
        theme.bg_color = args.bg.clone();
    }
    if args.text.is_some() {
        theme.text_color = args.text.clone();
    }

    let host = Rc::new(EnvHost::new(args.student_id.map(User::with_id), theme));
    let page = Rc::new(StaticPage::default());
    ThemeSync::new(page.clone(), config.theme.clone()).register(&host);

    let api_base = resolve_api_base(args.base.as_deref(), &config.api_base);
    let controller =
        DashboardController::new(host, BlockingTransport::new(), page.clone(), config, api_base);
    let outcome = futures::executor::block_on(controller.run());

    let document = page.to_document();
    match &args.out {
        Some(path) => {
            if let Err(err) = std::fs::write(path, &document) {
                eprintln!("no se pudo escribir {path}: {err}");
                return ExitCode::FAILURE;
            }
            log::info!("vista previa escrita en {path}");
        }
        None => print!("{document}"),
    }

    if outcome.is_rendered() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

// El binario de vista previa sólo tiene sentido en nativo.
#[cfg(target_arch = "wasm32")]
fn main() {}
