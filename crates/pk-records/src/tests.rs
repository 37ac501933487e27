//! Unit tests for pk-records.

use std::io::Cursor;

use crate::{StreetRecord, load_records_reader};

const HEADER: &str = "id,hora_a_la_que_comenz_el_parqueo,hora_a_la_que_finaliz_el_parqueo,\
sentido_de_la_calle_donde_estacion,tipo_de_vehculo,propsito_del_parqueo,nivel_de_disrupcin";

fn load(rows: &str) -> Vec<StreetRecord> {
    load_records_reader(Cursor::new(format!("{HEADER}\n{rows}"))).unwrap()
}

#[cfg(test)]
mod clock {
    use crate::ClockTime;

    #[test]
    fn parses_minutes_and_seconds() {
        assert_eq!(ClockTime::parse("07:05").unwrap(), ClockTime(7 * 3_600 + 5 * 60));
        assert_eq!(ClockTime::parse("7:05:30").unwrap().secs(), 25_530);
        assert_eq!(ClockTime::parse(" 00:00 ").unwrap().secs(), 0);
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "7", "24:00", "07:60", "07:05:61", "a:b", "1:2:3:4"] {
            assert!(ClockTime::parse(bad).is_err(), "{bad:?}");
        }
    }

    #[test]
    fn display() {
        assert_eq!(ClockTime(25_530).to_string(), "07:05:30");
    }
}

#[cfg(test)]
mod tags {
    use crate::{Disruption, Purpose, StreetSide, VehicleClass};

    #[test]
    fn numeric_codes() {
        assert_eq!(VehicleClass::parse("1"), Some(VehicleClass::BigTruck));
        assert_eq!(VehicleClass::parse("5"), Some(VehicleClass::Motorcycle));
        assert_eq!(Purpose::parse("2"), Some(Purpose::PassengerTransport));
        assert_eq!(Disruption::parse("3"), Some(Disruption::Major));
        assert_eq!(VehicleClass::parse("6"), None);
        assert_eq!(Disruption::parse("4"), None);
    }

    #[test]
    fn labels_are_case_insensitive() {
        assert_eq!(VehicleClass::parse("Medium Truck"), Some(VehicleClass::MediumTruck));
        assert_eq!(VehicleClass::parse("SMALL-TRUCK"), Some(VehicleClass::SmallTruck));
        assert_eq!(Purpose::parse("Goods_Delivery"), Some(Purpose::GoodsDelivery));
        assert_eq!(StreetSide::parse("sur-norte"), Some(StreetSide::SouthToNorth));
        assert_eq!(StreetSide::parse("NORTE-SUR"), Some(StreetSide::NorthToSouth));
    }

    #[test]
    fn stations() {
        assert_eq!(StreetSide::SouthToNorth.station(), 'C');
        assert_eq!(StreetSide::NorthToSouth.station(), 'D');
        assert!(VehicleClass::BigTruck.is_truck());
        assert!(!VehicleClass::Car.is_truck());
    }
}

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use super::{HEADER, load};
    use crate::{
        ClockTime, EventKind, RecordError, StreetSide, VehicleClass, load_records_reader,
    };

    #[test]
    fn row_with_finish_yields_arrival_and_departure() {
        let recs = load("17,07:05,07:21,SUR-NORTE,2,1,1\n18,07:09,,NORTE-SUR,4,2,0\n");
        assert_eq!(recs.len(), 3);

        assert_eq!(recs[0].id, "17");
        assert_eq!(recs[0].kind, EventKind::Arrival);
        assert_eq!(recs[1].kind, EventKind::Departure);
        assert_eq!(recs[1].id, "17");
        assert_eq!(recs[1].timestamp(), ClockTime::parse("07:21").unwrap());
        assert_eq!(recs[0].vehicle, VehicleClass::MediumTruck);

        assert_eq!(recs[2].kind, EventKind::Arrival);
        assert_eq!(recs[2].side, StreetSide::NorthToSouth);
        assert_eq!(recs[2].ended_at, None);
    }

    #[test]
    fn columns_accepted_in_any_order() {
        let csv = "tipo_de_vehculo,id,nivel_de_disrupcin,hora_a_la_que_comenz_el_parqueo,\
propsito_del_parqueo,hora_a_la_que_finaliz_el_parqueo,sentido_de_la_calle_donde_estacion\n\
car,1,none,08:00,transport,,C\n";
        let recs = load_records_reader(Cursor::new(csv)).unwrap();
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].vehicle, VehicleClass::Car);
        assert_eq!(recs[0].side, StreetSide::SouthToNorth);
    }

    #[test]
    fn unknown_column_rejected() {
        let csv = format!("{HEADER},bogus\n1,08:00,,SUR-NORTE,4,1,0,x\n");
        match load_records_reader(Cursor::new(csv)).unwrap_err() {
            RecordError::UnknownColumn(name) => assert_eq!(name, "bogus"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn id_column_must_be_named_id() {
        let csv = HEADER.replacen("id,", "codigo,", 1) + "\n1,08:00,,SUR-NORTE,4,1,0\n";
        match load_records_reader(Cursor::new(csv)).unwrap_err() {
            RecordError::UnknownColumn(name) => assert_eq!(name, "codigo"),
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn missing_column_rejected() {
        let csv = "id,hora_a_la_que_comenz_el_parqueo\n1,08:00\n";
        let err = load_records_reader(Cursor::new(csv)).unwrap_err();
        assert!(matches!(err, RecordError::MissingColumn("hora_a_la_que_finaliz_el_parqueo")));
    }

    #[test]
    fn unknown_tag_names_row_and_column() {
        let csv = format!("{HEADER}\n1,08:00,,SUR-NORTE,4,1,0\n2,08:01,,SUR-NORTE,9,1,0\n");
        match load_records_reader(Cursor::new(csv)).unwrap_err() {
            RecordError::UnknownTag { row, column, value } => {
                assert_eq!(row, 2);
                assert_eq!(column, "tipo_de_vehculo");
                assert_eq!(value, "9");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn malformed_time_rejected() {
        let csv = format!("{HEADER}\n1,8h00,,SUR-NORTE,4,1,0\n");
        assert!(matches!(
            load_records_reader(Cursor::new(csv)).unwrap_err(),
            RecordError::Parse(_)
        ));
    }

    #[test]
    fn header_only_is_empty() {
        assert!(load("").is_empty());
    }
}

#[cfg(test)]
mod order {
    use super::load;
    use crate::{EventKind, inter_arrival_delays, sort_by_timestamp};

    #[test]
    fn departures_interleave_by_their_end_time() {
        let mut recs = load(
            "a,07:00,07:30,SUR-NORTE,1,1,0\n\
             b,07:10,,NORTE-SUR,4,2,0\n\
             c,07:20,07:25,SUR-NORTE,3,1,1\n",
        );
        sort_by_timestamp(&mut recs);
        let seq: Vec<(&str, EventKind)> = recs.iter().map(|r| (r.id.as_str(), r.kind)).collect();
        assert_eq!(
            seq,
            vec![
                ("a", EventKind::Arrival),
                ("b", EventKind::Arrival),
                ("c", EventKind::Arrival),
                ("c", EventKind::Departure),
                ("a", EventKind::Departure),
            ]
        );
    }

    #[test]
    fn sort_is_stable_on_ties() {
        let mut recs = load(
            "z,09:00,,SUR-NORTE,4,2,0\n\
             y,08:00,,SUR-NORTE,4,2,0\n\
             x,09:00,,SUR-NORTE,4,2,0\n\
             w,09:00,,SUR-NORTE,4,2,0\n",
        );
        sort_by_timestamp(&mut recs);
        let ids: Vec<&str> = recs.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, ["y", "z", "x", "w"]);
    }

    #[test]
    fn delays_from_timestamps() {
        let mut recs = load(
            "a,07:00,,SUR-NORTE,4,2,0\n\
             b,07:00:45,,SUR-NORTE,4,2,0\n\
             c,07:02,,SUR-NORTE,4,2,0\n",
        );
        sort_by_timestamp(&mut recs);
        assert_eq!(inter_arrival_delays(&recs), vec![0.0, 45.0, 75.0]);
        assert!(inter_arrival_delays(&[]).is_empty());
    }
}
