//! Generic label for each tactical graphic type.

use crate::graphic::{SymbolVersion, TacticalLine};

/// Short generic label printed on a graphic ("PL", "FEBA", "NAI", …).
///
/// Total over [`TacticalLine`]; types that carry no generic label map to `""`.
pub fn label_for(line_type: TacticalLine, version: SymbolVersion) -> &'static str {
    use TacticalLine::*;

    match line_type {
        // Control lines
        PL => "PL",
        FEBA => "FEBA",
        LL => "LL",
        EWL => "EWL",
        FCL => "FCL",
        FSCL => "FSCL",
        CFL => "CFL",
        NFL => "NFL",
        RFL => "RFL",
        MFP => "MFP",
        BCL | BCL_REVD => "BCL",
        ICL => "ICL",
        HOLD | HOLD_GE => "HL",
        BRDGHD | BRDGHD_GE => {
            if version >= SymbolVersion::V2525E {
                "BL"
            } else {
                "B"
            }
        }
        LOA => "LOA",
        LD => "LD",
        LDLC => "LD/LC",
        RELEASE => "RL",
        PLD => "PLD",
        SL => "SL",
        TC => "TC",
        IFF_OFF => "IFF OFF",
        IFF_ON => "IFF ON",
        FLOT => "FLOT",
        LC => "LC",
        PDF => "PDF",

        // Bearing lines
        ELECTRO => "E",
        ACOUSTIC => "A",
        TORPEDO => "T",
        OPTICAL => "O",

        // Linear targets
        LINTGTS => "SMOKE",
        FPF => "FPF",

        // Air corridors
        AC => "AC",
        SAAFR => "SAAFR",
        LLTR => "LLTR",
        MRR => "MRR",
        SC => "SC",
        UAV => "UA",

        // Tactical tasks
        BLOCK | BREACH | BYPASS => "B",
        CANALIZE | CLEAR | CONTAIN | COVER => "C",
        CATK | CATKBYFIRE => "CATK",
        DELAY | DISRUPT => "D",
        FIX => "F",
        ISOLATE => "I",
        OCCUPY => "O",
        PENETRATE | PURSUIT => "P",
        RIP => "RIP",
        RETAIN | RETIREMENT => "R",
        SECURE | SEIZE | SCREEN => "S",
        GUARD => "G",
        WITHDRAW => "W",
        WDRAWUP => "WP",
        DISENGAGE => "DIS",
        DEMONSTRATE => "DEM",
        MOBILE_DEFENSE => "MD",
        FPOL => "P(P)",
        RPOL => "P(R)",
        CORDONKNOCK => "C/K",
        CORDONSEARCH => "C/S",

        // Routes
        MSR | MSR_ONEWAY | MSR_TWOWAY | MSR_ALT => "MSR",
        ASR | ASR_ONEWAY | ASR_TWOWAY | ASR_ALT => "ASR",

        // Maneuver and support areas
        AO => "AO",
        NAI => "NAI",
        TAI => "TAI",
        OBJ => "OBJ",
        EA => "EA",
        ASSY => "AA",
        ATKPOS => "ATK",
        DZ => "DZ",
        EZ => "EZ",
        LZ => "LZ",
        PZ => "PZ",
        LAA => "LAA",
        FARP => "FARP",
        ASSAULT => "ASLT",
        PNO => "(P)",
        BASE_CAMP | BASE_CAMP_REVD => "BC",
        GUERILLA_BASE | GUERILLA_BASE_REVD => "GB",
        NOTACK => "N",
        MINED | FENCED => "M",
        UXO => "UXO",
        ABATIS => "A",

        // Airspace coordination areas
        SAA => "SAA",
        SGAA => "SGAA",
        ROZ => "ROZ",
        AARROZ => "AARROZ",
        UAROZ => "UAROZ",
        WEZ => "WEZ",
        FEZ => "FEZ",
        JEZ => "JEZ",
        MEZ => "MEZ",
        LOMEZ => "LOMEZ",
        HIMEZ => "HIMEZ",
        FAADZ => "SHORADEZ",
        HIDACZ => "HIDACZ",
        WFZ => "WFZ",
        BDZ => "BDZ",
        JTAA => "JTAA",

        // Fire support areas
        FSA | FSA_RECTANGULAR | FSA_CIRCULAR => "FSA",
        ACA | ACA_RECTANGULAR | ACA_CIRCULAR => "ACA",
        FFA | FFA_RECTANGULAR | FFA_CIRCULAR => "FFA",
        NFA | NFA_RECTANGULAR | NFA_CIRCULAR => "NFA",
        RFA | RFA_RECTANGULAR | RFA_CIRCULAR => "RFA",
        PAA | PAA_RECTANGULAR | PAA_CIRCULAR => "PAA",
        ATI | ATI_RECTANGULAR | ATI_CIRCULAR => "ATI ZONE",
        CFFZ | CFFZ_RECTANGULAR | CFFZ_CIRCULAR => "CFF ZONE",
        SENSOR | SENSOR_RECTANGULAR | SENSOR_CIRCULAR => "SENSOR ZONE",
        CENSOR | CENSOR_RECTANGULAR | CENSOR_CIRCULAR => "CENSOR ZONE",
        DA | DA_RECTANGULAR | DA_CIRCULAR => "DA",
        CFZ | CFZ_RECTANGULAR | CFZ_CIRCULAR => "CF ZONE",
        ZOR | ZOR_RECTANGULAR | ZOR_CIRCULAR => "ZOR",
        TBA | TBA_RECTANGULAR | TBA_CIRCULAR => "TBA",
        TVAR | TVAR_RECTANGULAR | TVAR_CIRCULAR => "TVAR",
        KILLBOXBLUE | KILLBOXBLUE_RECTANGULAR | KILLBOXBLUE_CIRCULAR => "BKB",
        KILLBOXPURPLE | KILLBOXPURPLE_RECTANGULAR | KILLBOXPURPLE_CIRCULAR => "PKB",

        // Targets and sensor coverage
        BOMB => "BOMB",
        SHIP_AOI_RECTANGULAR | SHIP_AOI_CIRCULAR => "AOI",
        DEFENDED_AREA_RECTANGULAR | DEFENDED_AREA_CIRCULAR => "DA",
        LAUNCH_AREA => "LA",

        BOUNDARY | BEARING | LINTGT | FOLLA | FOLSP | TRAFFIC_ROUTE | TRAFFIC_ROUTE_ONEWAY
        | TRAFFIC_ROUTE_ALT | CONVOY | HCONVOY | MAIN | SPT | AIRAOA | AAAAA | AXAD
        | DIRATKAIR | DIRATKGND | DIRATKSPT | GENERAL | AIRFIELD | BATTLE | STRONG | OBSAREA
        | OBSFAREA | RECTANGULAR | CIRCULAR | RECTANGULAR_TARGET | RANGE_FAN
        | RANGE_FAN_SECTOR | RANGE_FAN_FILL | RADAR_SEARCH | PBS_RECTANGLE | PBS_SQUARE
        | PBS_CIRCLE | PBS_ELLIPSE => "",
    }
}
