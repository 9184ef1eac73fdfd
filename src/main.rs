use std::io::{self, Write};
use std::process::{self, Stdio};

use yq::config::Config;
use yq::debug::{DebugSink, NoopSink, StderrSink};
use yq::{WrapError, Wrapper, FATAL_EXIT_CODE};

fn main() {
    yq::logging::init_tracing();

    let code = match run() {
        Ok(code) => code,
        Err(err) => {
            tracing::error!(kind = err.kind(), error = %err, "wrapper failed");
            let _ = io::stderr().lock().write_all(err.fatal_line().as_bytes());
            FATAL_EXIT_CODE
        }
    };

    // replay the exit code
    process::exit(code);
}

fn run() -> Result<i32, WrapError> {
    let config = Config::resolve()?;
    let args = std::env::args_os().skip(1);

    let sink: Box<dyn DebugSink> = if config.debug {
        Box::new(StderrSink)
    } else {
        Box::new(NoopSink)
    };

    let wrapper = Wrapper::new(config.jq, args).with_sink(sink);
    let result = wrapper.run(io::stdin().lock(), io::stdout().lock(), Stdio::inherit())?;
    Ok(result.exit_code())
}
