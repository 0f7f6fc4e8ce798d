use std::fmt;

/// The three webhook flavours the board sends us.
///
/// Each variant owns a fixed pair of board columns (where the URL is read from and
/// where the rendered QR card is attached) and an overlay color used to tint the
/// background of the card. The tables are compile-time constants; nothing here is
/// editable at runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndpointType {
    Guides,
    Clients,
    Suppliers,
}

/// Source and destination columns for one endpoint type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnMapping {
    /// Text column holding the URL to encode.
    pub url_column: &'static str,
    /// File column receiving the generated PNG.
    pub file_column: &'static str,
}

/// Straight-alpha RGBA tint laid over the background.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OverlayColor(pub [u8; 4]);

impl OverlayColor {
    pub const fn rgba(self) -> [u8; 4] {
        self.0
    }
}

impl EndpointType {
    pub const ALL: [EndpointType; 3] = [
        EndpointType::Guides,
        EndpointType::Clients,
        EndpointType::Suppliers,
    ];

    /// Route name, also used as the log label.
    pub const fn name(self) -> &'static str {
        match self {
            EndpointType::Guides => "qrguias",
            EndpointType::Clients => "qrclientes",
            EndpointType::Suppliers => "qrfornecedores",
        }
    }

    pub const fn path(self) -> &'static str {
        match self {
            EndpointType::Guides => "/qrguias",
            EndpointType::Clients => "/qrclientes",
            EndpointType::Suppliers => "/qrfornecedores",
        }
    }

    pub const fn columns(self) -> ColumnMapping {
        match self {
            EndpointType::Guides => ColumnMapping {
                url_column: "text_mkspdyty",
                file_column: "file_mksww9yh",
            },
            EndpointType::Clients => ColumnMapping {
                url_column: "text_mksvzfm1",
                file_column: "file_mksws2k3",
            },
            EndpointType::Suppliers => ColumnMapping {
                url_column: "text_mksw9b2r",
                file_column: "file_mkswpexs",
            },
        }
    }

    pub const fn overlay(self) -> OverlayColor {
        match self {
            // turquoise
            EndpointType::Guides => OverlayColor([64, 224, 208, 128]),
            // purple
            EndpointType::Clients => OverlayColor([147, 112, 219, 128]),
            // cornflower blue
            EndpointType::Suppliers => OverlayColor([100, 149, 237, 128]),
        }
    }
}

impl fmt::Display for EndpointType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
