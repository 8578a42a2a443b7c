#[macro_use]
extern crate failure;
#[macro_use]
extern crate opensiedler_util;
use itertools::Itertools;

pub use log::{trace, debug, info, warn, error};

pub fn init_logging(str_app_name: &str) -> Result<(), failure::Error> {
    fern::Dispatch::new()
        .format(|formatcallback, fmtarguments_msg, logrecord| {
            formatcallback.finish(format_args!(
                "[{} {}({:?}) {}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
                logrecord.target(),
                std::thread::current().id(),
                logrecord.level(),
                fmtarguments_msg,
            ))
        })
        .level(if_dbg_else!({log::LevelFilter::Trace}{log::LevelFilter::Info}))
        .chain(fern::log_file(
            dirs::home_dir().ok_or_else(||format_err!("home_dir error"))?
                .join(format!("{str_app_name}.log"))
        )?)
        .apply()?;
    let fn_panic_handler_original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panicinfo| {
        error!("panic: {}", panicinfo);
        fn_panic_handler_original(panicinfo)
    }));
    info!("Started: {}", std::env::args()
        .format_with(
            /*sep*/" ",
            |str_arg, formatter| {
                formatter(&format_args!("\"{}\"", str_arg))
            },
        )
    );
    Ok(())
}
