//! Static copy for the hardware pages and the design-tool export.

pub const PROJECT_NAME: &str = "WS2811 LED CONTROLLER";
pub const PROJECT_DESCRIPTION: &str = "ART-NET LED controller with 32 WS2811 outputs";
pub const DESIGN_TOOL_URL: &str = "https://www.celus.io/en/design-platform";

pub const SCHEMATIC_FILE: &str = "assets/led-controller-schematic.jpg";
pub const PCB_FILE: &str = "assets/main-pcb-premium-top.jpg";
pub const BOM_FILE: &str = "led-controller-BOM.csv";

pub const GERBER_FILES: &[&str] = &[
    "led-controller.GTL",
    "led-controller.GBL",
    "led-controller.GTO",
    "led-controller.GBS",
    "led-controller.GTS",
    "led-controller.GML",
];

/// One label/value line of a specification table.
#[derive(Debug, Clone, Copy)]
pub struct SpecRow {
    pub label: &'static str,
    pub value: &'static str,
}

/// One line of a component listing.
#[derive(Debug, Clone, Copy)]
pub struct ComponentRow {
    pub name: &'static str,
    pub qty: &'static str,
    pub part: &'static str,
}

/// One row of the flat-cable pinout table.
#[derive(Debug, Clone, Copy)]
pub struct PinoutRow {
    pub pins: &'static str,
    pub signal: &'static str,
    pub description: &'static str,
}

/// One of the four stackable output boards.
#[derive(Debug, Clone, Copy)]
pub struct OutputBoard {
    pub number: u8,
    pub range: &'static str,
}

pub const MAIN_PCB_SPECS: &[SpecRow] = &[
    SpecRow { label: "DIMENSIONS", value: "160mm x 120mm" },
    SpecRow { label: "LAYERS", value: "4 Layer PCB" },
    SpecRow { label: "THICKNESS", value: "1.6mm" },
    SpecRow { label: "FINISH", value: "HASL Lead-Free" },
    SpecRow { label: "SOLDER MASK", value: "Matte Green" },
    SpecRow { label: "SILKSCREEN", value: "White" },
];

pub const MAIN_PCB_COMPONENTS: &[ComponentRow] = &[
    ComponentRow { name: "Main microcontroller", qty: "1x", part: "STM32F4" },
    ComponentRow { name: "WS2811 drivers", qty: "32x", part: "SN74HCT245" },
    ComponentRow { name: "RJ45 connectors", qty: "2x", part: "Ethernet" },
    ComponentRow { name: "Voltage regulators", qty: "3x", part: "5V/3.3V" },
    ComponentRow { name: "Flat cable connector", qty: "1x", part: "20-Pin FFC" },
    ComponentRow { name: "Status LEDs", qty: "4x", part: "SMD 0805" },
    ComponentRow { name: "Output connectors", qty: "32x", part: "3-Pin JST" },
    ComponentRow { name: "Filter capacitors", qty: "16x", part: "SMD 1206" },
];

pub const MAIN_PCB_CHARACTERISTICS: &[&str] = &[
    "5V DC power supply",
    "20A maximum current",
    "-20°C to +70°C operating range",
    "ART-NET over Ethernet",
    "40 FPS refresh rate",
    "512 channels per universe",
];

pub const DISPLAY_PCB_SPECS: &[SpecRow] = &[
    SpecRow { label: "DIMENSIONS", value: "80mm x 60mm" },
    SpecRow { label: "LAYERS", value: "2 Layer PCB" },
    SpecRow { label: "THICKNESS", value: "1.6mm" },
    SpecRow { label: "FINISH", value: "HASL Lead-Free" },
    SpecRow { label: "SOLDER MASK", value: "Matte Green" },
    SpecRow { label: "SILKSCREEN", value: "White" },
];

pub const DISPLAY_PCB_COMPONENTS: &[ComponentRow] = &[
    ComponentRow { name: "LCD display", qty: "1x", part: "16x2 Character" },
    ComponentRow { name: "Tactile buttons", qty: "4x", part: "6mm SPST" },
    ComponentRow { name: "Status LEDs", qty: "4x", part: "SMD 0805" },
    ComponentRow { name: "Flat cable connector", qty: "1x", part: "20-Pin FFC" },
    ComponentRow { name: "Pull-up resistors", qty: "8x", part: "10kΩ SMD" },
    ComponentRow { name: "Bypass capacitors", qty: "4x", part: "100nF SMD" },
    ComponentRow { name: "Voltage regulator", qty: "1x", part: "3.3V LDO" },
];

pub const FLAT_CABLE_PINOUT: &[PinoutRow] = &[
    PinoutRow { pins: "1-2", signal: "VCC (5V)", description: "Power" },
    PinoutRow { pins: "3-4", signal: "GND", description: "Ground" },
    PinoutRow { pins: "5-8", signal: "LCD Data", description: "Display bus" },
    PinoutRow { pins: "9-10", signal: "LCD Control", description: "RS/Enable" },
    PinoutRow { pins: "11-14", signal: "Button Inputs", description: "Front panel keys" },
    PinoutRow { pins: "15-18", signal: "LED Outputs", description: "Status indicators" },
    PinoutRow { pins: "19-20", signal: "SPI/I2C", description: "Serial link" },
];

pub const DISPLAY_PCB_ADVANTAGES: &[&str] = &[
    "Flexible panel installation",
    "Easier maintenance and repair",
    "Flat cable runs up to 50cm",
    "Interference protection",
    "Compact professional design",
    "Easy part replacement",
];

pub const OUTPUT_PCB_SPECS: &[SpecRow] = &[
    SpecRow { label: "DIMENSIONS", value: "100mm x 60mm" },
    SpecRow { label: "LAYERS", value: "2 Layer PCB" },
    SpecRow { label: "THICKNESS", value: "1.6mm" },
    SpecRow { label: "FINISH", value: "HASL Lead-Free" },
    SpecRow { label: "SOLDER MASK", value: "Matte Green" },
    SpecRow { label: "SILKSCREEN", value: "White" },
];

pub const OUTPUT_PCB_COMPONENTS: &[ComponentRow] = &[
    ComponentRow { name: "WS2811 drivers", qty: "8x", part: "SN74HCT245" },
    ComponentRow { name: "Screw terminals", qty: "8x", part: "3-Pin Terminal" },
    ComponentRow { name: "Flat cable connector", qty: "1x", part: "20-Pin FFC" },
    ComponentRow { name: "Status LEDs", qty: "8x", part: "SMD 0805" },
    ComponentRow { name: "Filter capacitors", qty: "8x", part: "SMD 1206" },
    ComponentRow { name: "Pull-up resistors", qty: "8x", part: "SMD 0805" },
];

pub const OUTPUT_BOARDS: &[OutputBoard] = &[
    OutputBoard { number: 1, range: "01-08" },
    OutputBoard { number: 2, range: "09-16" },
    OutputBoard { number: 3, range: "17-24" },
    OutputBoard { number: 4, range: "25-32" },
];

/// Legend cards under the wiring diagram.
pub const SCHEMATIC_NOTES: &[(&str, &[&str])] = &[
    (
        "MAIN LINK",
        &[
            "50-pin flat cable",
            "Runs up to 30cm",
            "IDC connectors",
            "Data and power combined",
        ],
    ),
    (
        "DISTRIBUTION",
        &[
            "4x FFC 20P cables",
            "Data buffering",
            "Per-board isolation",
            "Status LEDs",
        ],
    ),
    (
        "AMPLIFICATION",
        &[
            "74HCT245 + ULN2803",
            "Galvanic isolation",
            "Strips up to 100m",
            "ESD and surge protection",
        ],
    ),
    (
        "POWER",
        &[
            "External 5V/12V/24V",
            "Local regulators",
            "Line filtering",
            "Overload protection",
        ],
    ),
];

/// Notes columns on the output-boards page.
pub const OUTPUT_SYSTEM_NOTES: &[(&str, &[&str])] = &[
    (
        "CONNECTIVITY",
        &[
            "20-pin flat cable per board",
            "3-terminal screw connectors",
            "Interference shielding",
            "Maximum cable length 2m",
        ],
    ),
    (
        "CHARACTERISTICS",
        &[
            "8 WS2811 drivers per board",
            "Individual status LEDs",
            "Overcurrent protection",
            "Power line filtering",
        ],
    ),
    (
        "INSTALLATION",
        &[
            "DIN rail mounting",
            "Clear output labelling",
            "Modular maintenance",
            "Simple expansion",
        ],
    ),
];
