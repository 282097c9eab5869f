//=============================================================================
// File: src/components/qr_code.rs
//=============================================================================
use dioxus::prelude::*;
use qrcode::render::svg;
use qrcode::QrCode;

#[derive(Props, Clone, PartialEq)]
pub struct QrCodeViewProps {
    /// Encoded verbatim. Payment links must survive the round trip
    /// bit-exact (case included) or UPI apps will reject the scan.
    pub data: String,
    #[props(optional)]
    pub caption: Option<String>,
}

/// A static QR code sized for phone cameras.
#[allow(non_snake_case)]
pub fn QrCodeView(props: QrCodeViewProps) -> Element {
    match QrCode::new(props.data.as_bytes()) {
        Ok(code) => {
            let image = code.render::<svg::Color>().min_dimensions(200, 200).build();
            rsx! {
                figure {
                    style: "margin: 0;",
                    div {
                        title: "{props.data}",
                        dangerous_inner_html: "{image}",
                    }
                    if let Some(caption_text) = &props.caption {
                        figcaption {
                            style: "text-align: center; font-size: 14px; margin-top: 8px;",
                            "{caption_text}"
                        }
                    }
                }
            }
        }
        Err(e) => rsx! {
            p {
                style: "color: red; font-family: sans-serif; font-size: 14px; border: 1px solid red; padding: 10px; border-radius: 5px;",
                "Error generating QR code: {e}"
            }
        },
    }
}
