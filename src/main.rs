use app::{AppHelper, AuthorsCommand, CheckCommand, Command, DialogueCommand, EvaluateCommand};

mod app;

const AUTHORS: &str = "The Carneades developers";

fn main() {
    let app_name = option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name");
    let app_version = option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version");
    let mut app = AppHelper::new(
        app_name,
        app_version,
        AUTHORS,
        "Carneades, a structured argumentation evaluator.",
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AuthorsCommand::new(app_name, app_version, AUTHORS)),
        Box::new(CheckCommand::new()),
        Box::new(DialogueCommand::new()),
        Box::new(EvaluateCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app.launch_app();
}
