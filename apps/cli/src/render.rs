//! Console rendering for decoded records.

use core_types::{Frame, NavRecord};

/// "AA AA AA 03 ..." echo of the message bytes, for diagnosing a garbled
/// decode against what actually came off the wire.
pub fn hex_echo(frame: &Frame) -> String {
    frame
        .bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<String>>()
        .join(" ")
}

fn hex_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| format!("{b:02X}"))
        .collect::<Vec<String>>()
        .join(" ")
}

fn dec_list(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|b| b.to_string())
        .collect::<Vec<String>>()
        .join(" ")
}

/// Render one decoded message with its raw echo.
///
/// Position and altitude lines are annotated when the fix status says the
/// values are stale, rather than being suppressed: a reading that is about
/// to become valid is still worth seeing.
pub fn render(frame: &Frame, record: &NavRecord) -> String {
    let position_note = if record.position_valid { "" } else { "  (no fix)" };
    let altitude_note = if record.altitude_valid { "" } else { "  (no 3D fix)" };

    let mut out = String::with_capacity(1024);
    out.push_str(&format!("Message (raw): {}\n", hex_echo(frame)));
    out.push_str("\nParsed Data:\n");
    out.push_str(&format!("  Status         : {}\n", record.status));
    out.push_str(&format!(
        "  Latitude       : {:.6}\u{B0}{position_note}\n",
        record.latitude_deg
    ));
    out.push_str(&format!(
        "  Longitude      : {:.6}\u{B0}{position_note}\n",
        record.longitude_deg
    ));
    out.push_str(&format!(
        "  Altitude       : {:.1} m{altitude_note}\n",
        record.altitude_m
    ));
    out.push_str(&format!("  Delta Latitude : {:.6}\n", record.delta_latitude));
    out.push_str(&format!("  Delta Longitude: {:.6}\n", record.delta_longitude));
    out.push_str(&format!("  Delta Altitude : {:.2} m\n", record.delta_altitude_m));
    out.push_str(&format!("  GPS Time       : {} s\n", record.time_of_week_s));
    out.push_str(&format!("  GPS Week       : {}\n", record.week));
    out.push_str(&format!(
        "  Decoded Time   : {}\n",
        record.utc.format("%Y-%m-%d %H:%M:%S UTC")
    ));
    out.push_str(&format!("  Satellites     : {}\n", record.satellites));
    out.push_str(&format!("  S/N Signal     : {}\n", hex_list(&record.snr)));
    out.push_str(&format!("  Satellite Nos  : {}\n", dec_list(&record.prn)));
    out.push_str(&format!("  Checksum       : {}\n", hex_list(&record.checksum)));
    out.push_str(&format!("\n{}\n", "-".repeat(60)));
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use core_types::FixStatus;

    fn record(status: FixStatus) -> NavRecord {
        NavRecord {
            status,
            raw_status: 3,
            latitude_deg: 10.0,
            longitude_deg: 20.5,
            position_valid: status.has_position(),
            altitude_m: 123.4,
            altitude_valid: status.has_altitude(),
            delta_latitude: 0.000_002,
            delta_longitude: -0.000_003,
            delta_altitude_m: -0.01,
            time_of_week_s: 302_400,
            week: 2286,
            utc: Utc.with_ymd_and_hms(2063, 2, 7, 12, 0, 0).unwrap(),
            satellites: 7,
            snr: [0x2A; 16],
            prn: [12; 16],
            checksum: [0xAB, 0xCD],
        }
    }

    #[test]
    fn test_hex_echo() {
        let frame = Frame::new_rx(vec![0xAA, 0xAA, 0xAA, 0x03, 0x00], 0);
        assert_eq!(hex_echo(&frame), "AA AA AA 03 00");
    }

    #[test]
    fn test_render_full_fix() {
        let frame = Frame::new_rx(vec![0xAA; 62], 0);
        let out = render(&frame, &record(FixStatus::Fix3d));
        assert!(out.contains("Status         : 3D fix"));
        assert!(out.contains("Latitude       : 10.000000\u{B0}\n"));
        assert!(out.contains("Altitude       : 123.4 m\n"));
        assert!(out.contains("Decoded Time   : 2063-02-07 12:00:00 UTC"));
        assert!(out.contains("Checksum       : AB CD"));
        assert!(!out.contains("(no fix)"));
    }

    #[test]
    fn test_render_unlocked_annotations() {
        let frame = Frame::new_rx(vec![0xAA; 62], 0);
        let out = render(&frame, &record(FixStatus::Unlocked));
        assert!(out.contains("Status         : unlocked"));
        assert!(out.contains("Latitude       : 10.000000\u{B0}  (no fix)"));
        assert!(out.contains("Altitude       : 123.4 m  (no 3D fix)"));
    }

    #[test]
    fn test_render_2d_fix_altitude_only_annotated() {
        let frame = Frame::new_rx(vec![0xAA; 62], 0);
        let out = render(&frame, &record(FixStatus::Fix2d));
        assert!(out.contains("Latitude       : 10.000000\u{B0}\n"));
        assert!(out.contains("Altitude       : 123.4 m  (no 3D fix)"));
    }
}
