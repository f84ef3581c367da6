use env_logger::Env;
use std::io::Write;

pub fn init_logging() {
    match env_logger::Builder::from_env(Env::default())
        .format(|buf, record| {
            // Split string on a character and take the last part
            fn take_last(s: &str, c: char) -> &str {
                s.split(c).last().unwrap_or("")
            }

            // Drop the "libarchive::" prefix and the last segment, "::" becomes "/"
            fn format_target(target: &str) -> String {
                target
                    .strip_prefix("libarchive::")
                    .unwrap_or(target)
                    .rsplit_once("::")
                    .map(|(path, _)| path.replace("::", "/"))
                    .unwrap_or_else(|| target.replace("::", "/"))
            }

            let formatted_target = format_target(record.target());
            let file_name = take_last(record.file().unwrap_or("unknown"), '/');
            let line_number = record.line().unwrap_or(0);

            writeln!(
                buf,
                "[{}] {} - {}/{}:{} {}",
                record.level(),
                chrono::Local::now().format("%Y-%m-%dT%H:%M:%S%.3f"),
                formatted_target,
                file_name,
                line_number,
                record.args()
            )
        })
        .try_init()
    {
        Ok(_) => (),
        Err(_) => {
            // Tests may have installed a logger already
        }
    }
}
