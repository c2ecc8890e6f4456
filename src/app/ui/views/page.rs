/// Pages of the showcase, addressed by URL-style routes
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
    Controller,
    Schematic,
    MainPcb,
    DisplayPcb,
    OutputPcb,
    NotFound(String),
}

/// Focus target on the controller page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Panel,
    Grid,
}

impl Page {
    /// Resolve a route string to a page. Unknown routes keep the
    /// requested path so the not-found page can echo it back.
    pub fn parse(path: &str) -> Self {
        match path {
            "/" => Page::Controller,
            "/schematic" => Page::Schematic,
            "/pcb" => Page::MainPcb,
            "/display-pcb" => Page::DisplayPcb,
            "/output-pcb" => Page::OutputPcb,
            other => Page::NotFound(other.to_string()),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            Page::Controller => "/",
            Page::Schematic => "/schematic",
            Page::MainPcb => "/pcb",
            Page::DisplayPcb => "/display-pcb",
            Page::OutputPcb => "/output-pcb",
            Page::NotFound(path) => path,
        }
    }

    pub fn title(&self) -> &str {
        match self {
            Page::Controller => "CONTROLLER",
            Page::Schematic => "WIRING DIAGRAM",
            Page::MainPcb => "MAIN BOARD",
            Page::DisplayPcb => "DISPLAY BOARD",
            Page::OutputPcb => "OUTPUT BOARDS",
            Page::NotFound(_) => "NOT FOUND",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_routes() {
        assert_eq!(Page::parse("/"), Page::Controller);
        assert_eq!(Page::parse("/schematic"), Page::Schematic);
        assert_eq!(Page::parse("/pcb"), Page::MainPcb);
        assert_eq!(Page::parse("/display-pcb"), Page::DisplayPcb);
        assert_eq!(Page::parse("/output-pcb"), Page::OutputPcb);
    }

    #[test]
    fn test_parse_unknown_route_keeps_path() {
        let page = Page::parse("/firmware");
        assert_eq!(page, Page::NotFound("/firmware".to_string()));
        assert_eq!(page.path(), "/firmware");
        assert_eq!(page.title(), "NOT FOUND");
    }

    #[test]
    fn test_path_round_trip() {
        for path in ["/", "/schematic", "/pcb", "/display-pcb", "/output-pcb"] {
            assert_eq!(Page::parse(path).path(), path);
        }
    }
}
