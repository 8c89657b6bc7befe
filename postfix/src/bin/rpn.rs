use postfix::EvalContext;
use rustyline::error::ReadlineError;

mod repl {
    use postfix::{to_postfix, EvalContext};

    // only digit operands give the evaluator something to work with
    fn is_numeric(rpn: &str) -> bool {
        !rpn.is_empty() && rpn.chars().all(|c| c.is_ascii_digit() || "+-*/^".contains(c))
    }

    pub fn convert_and_eval(cx: &EvalContext, input: &str) {
        let infix = input.trim();
        match to_postfix(infix) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) if is_numeric(&rpn) => match cx.eval(&rpn) {
                Err(e) => println!("{} -> {}, Eval error: {}", infix, rpn, e),
                Ok(result) => println!("{} -> {} = {}", infix, rpn, result),
            },
            Ok(rpn) => println!("{} -> {}", infix, rpn),
        }
    }

    pub fn parse_statement(cx: &EvalContext, input: &str) {
        match input.trim_start().strip_prefix(":rpn ") {
            Some(rpn) => match cx.eval(rpn) {
                Err(e) => println!("Eval error: {}", e),
                Ok(result) => println!("{}", result),
            },
            None => convert_and_eval(cx, input),
        }
    }

    pub fn demo(cx: &EvalContext) {
        let infix = "a*b/(c-a)+d*e";
        match to_postfix(infix) {
            Err(e) => println!("Parse error: {}", e),
            Ok(rpn) => println!("The infix conversion of {} results in {}", infix, rpn),
        }
        let rpn = "23*42-/56*+";
        match cx.eval(rpn) {
            Err(e) => println!("Eval error: {}", e),
            Ok(result) => println!("The evaluation of the postfix expression {} is {}", rpn, result),
        }
    }
}

fn main() -> Result<(), String> {
    let level = std::env::var("RPN_LOG")
        .ok()
        .and_then(|l| l.parse().ok())
        .unwrap_or(log::Level::Warn);
    simple_logger::init_with_level(level).map_err(|e| e.to_string())?;

    let mut cx = EvalContext::new();
    let mut demo = false;
    let mut words = Vec::new();
    for arg in std::env::args().skip(1) {
        if arg == "--demo" {
            demo = true;
        } else if let Some(grouping) = arg.strip_prefix("--group=") {
            cx.grouping = grouping.parse()?;
        } else {
            words.push(arg);
        }
    }

    if demo {
        repl::demo(&cx);
        return Ok(());
    }
    if !words.is_empty() {
        repl::convert_and_eval(&cx, &words.join(" "));
        return Ok(());
    }

    let histpath = dirs::home_dir().map(|h| h.join(".rpn_history"));
    let mut rl = rustyline::DefaultEditor::new().map_err(|e| e.to_string())?;
    if let Some(ref path) = histpath {
        if rl.load_history(path).is_err() {
            println!("No history yet");
        }
    }
    loop {
        match rl.readline(">> ") {
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(format!("Readline err: {:?}", e)),
            Ok(line) if line.trim().is_empty() => (),
            Ok(line) => {
                let _ = rl.add_history_entry(line.as_str());
                repl::parse_statement(&cx, &line);
            }
        }
    }
    if let Some(path) = histpath {
        rl.save_history(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}
