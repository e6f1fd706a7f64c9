use crate::info;

pub fn start_message() {
    let welcome_message = format!("
    ------------------------------------------------------------------
    |{: ^64}|
    |{: ^64}|
    |{: ^64}|
    ------------------------------------------------------------------
    ", "Creative Designs - vinyl catalog",
       concat!("Version: ", env!("CARGO_PKG_VERSION")),
       "Stickers, vinyl and holographic prints",
    );

    info!("{}", welcome_message);
}
