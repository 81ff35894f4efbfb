use anyhow::Result;
use clap::{Arg, Command};
use crossterm::{
    cursor, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{fs, io::stdout, panic, path::PathBuf};

use copybook::app::App;
use copybook::config::Settings;
use copybook::{input, sheet};

fn main() -> Result<()> {
    // Set up panic handler to properly clean up terminal on crash
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(stdout(), LeaveAlternateScreen);
        let _ = execute!(stdout(), cursor::Show);

        original_hook(panic_info);
    }));

    let matches = Command::new("copybook")
        .version(env!("BUILD_VERSION"))
        .about("Handwriting practice worksheet generator")
        .arg(
            Arg::new("file")
                .help("Text file with the practice text")
                .index(1),
        )
        .arg(
            Arg::new("text")
                .long("text")
                .help("Practice text given directly")
                .value_name("TEXT"),
        )
        .arg(
            Arg::new("stdout")
                .long("stdout")
                .help("Render the worksheet to stdout instead of interactive mode")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("output")
                .short('o')
                .long("output")
                .help("Render the worksheet to a file (use '-' for stdout)")
                .value_name("FILE"),
        )
        .arg(
            Arg::new("pdf")
                .long("pdf")
                .help("Export the worksheet as a PDF")
                .value_name("FILE"),
        )
        .arg(Arg::new("font").long("font").help("Font preset").value_name("NAME"))
        .arg(
            Arg::new("blank-lines")
                .long("blank-lines")
                .help("Blank rule lines after each text line")
                .value_name("N"),
        )
        .arg(
            Arg::new("width")
                .long("width")
                .help("Maximum characters per line")
                .value_name("CHARS"),
        )
        .arg(
            Arg::new("word-spacing")
                .long("word-spacing")
                .help("Extra spacing between words")
                .value_name("N"),
        )
        .arg(
            Arg::new("darkness")
                .long("darkness")
                .help("Ink darkness, 1-100")
                .value_name("N"),
        )
        .get_matches();

    let mut settings = Settings::load();
    settings.apply_overrides(
        matches.get_one::<String>("font").map(String::as_str),
        matches.get_one::<String>("blank-lines").map(String::as_str),
        matches.get_one::<String>("width").map(String::as_str),
        matches.get_one::<String>("word-spacing").map(String::as_str),
        matches.get_one::<String>("darkness").map(String::as_str),
    );

    let stdout_mode = matches.get_flag("stdout");
    let output_file = matches.get_one::<String>("output");
    let pdf_file = matches.get_one::<String>("pdf");

    // If any output target is given, run in non-interactive mode
    if stdout_mode || output_file.is_some() || pdf_file.is_some() {
        let mut app = App::new(settings);

        if let Some(text) = matches.get_one::<String>("text") {
            app.text = text.clone();
        } else if let Some(file_path) = matches.get_one::<String>("file") {
            let path = PathBuf::from(file_path);
            app.text = fs::read_to_string(&path)
                .map_err(|e| anyhow::anyhow!("cannot read '{}': {}", path.display(), e))?;
            app.file_path = Some(path);
        } else {
            eprintln!("Error: no input text (give a FILE or --text)");
            std::process::exit(1);
        }
        app.regenerate();

        if let Some(pdf_path) = pdf_file {
            let written = app
                .export_pdf(Some(PathBuf::from(pdf_path)))
                .map_err(|e| anyhow::anyhow!(e))?;
            println!("{}", written);
        } else {
            let rendered = sheet::sheet_to_text(&app.sheet);
            match output_file {
                Some(path) if path != "-" => fs::write(path, rendered)?,
                _ => println!("{}", rendered),
            }
        }
    } else {
        // Interactive mode
        let mut app = App::new(settings);

        if let Some(text) = matches.get_one::<String>("text") {
            app.text = text.clone();
            app.regenerate();
        } else if let Some(file_path) = matches.get_one::<String>("file") {
            app.load_file(PathBuf::from(file_path));
        }

        let setup_result = (|| -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
            enable_raw_mode()?;
            let mut stdout = stdout();
            execute!(stdout, EnterAlternateScreen)?;
            execute!(stdout, cursor::Hide)?;
            let backend = CrosstermBackend::new(stdout);
            Ok(Terminal::new(backend)?)
        })();

        let mut terminal = match setup_result {
            Ok(term) => term,
            Err(e) => {
                eprintln!("Failed to initialize terminal: {}", e);
                return Err(e);
            }
        };

        let res = input::run_app(&mut terminal, app);

        // Always clean up, even if there was an error
        let _ = disable_raw_mode();
        let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
        let _ = execute!(terminal.backend_mut(), cursor::Show);
        let _ = terminal.show_cursor();

        if let Err(err) = res {
            eprintln!("Application error: {}", err);
            std::process::exit(1);
        }
    }

    Ok(())
}
