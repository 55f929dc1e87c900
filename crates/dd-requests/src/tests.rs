//! Unit tests for dd-requests.

use dd_core::{Floor, RequestId, Tick};

use crate::Request;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn req(id: u32, arrival: u64, source: u32, dest: u32) -> Request {
    Request {
        id:      RequestId(id),
        arrival: Tick(arrival),
        source:  Floor(source),
        dest:    Floor(dest),
    }
}

// ── RequestValidator ──────────────────────────────────────────────────────────

#[cfg(test)]
mod validator {
    use dd_core::{Floor, RequestId, Tick};

    use crate::{CallRequest, RequestRejection, RequestValidator};

    #[test]
    fn admits_valid_request() {
        let mut v = RequestValidator::new(25);
        let r = v.admit(&CallRequest::new(4, 1, 5, 7)).unwrap();
        assert_eq!(r.id, RequestId(1));
        assert_eq!(r.arrival, Tick(4));
        assert_eq!(r.source, Floor(5));
        assert_eq!(r.dest, Floor(7));
        assert_eq!(v.admitted_count(), 1);
    }

    #[test]
    fn rejects_negative_arrival() {
        let mut v = RequestValidator::new(25);
        let err = v.admit(&CallRequest::new(-1, 1, 5, 7)).unwrap_err();
        assert_eq!(err, RequestRejection::NegativeArrival { id: RequestId(1), time: -1 });
        assert_eq!(err.reason(), "negative_arrival");
    }

    #[test]
    fn rejects_floor_out_of_range() {
        let mut v = RequestValidator::new(25);
        for (source, dest, bad) in [(0, 5, 0), (5, 26, 26), (-3, 4, -3)] {
            let err = v.admit(&CallRequest::new(0, 1, source, dest)).unwrap_err();
            assert_eq!(
                err,
                RequestRejection::FloorOutOfRange { id: RequestId(1), floor: bad, floor_count: 25 }
            );
        }
        assert_eq!(v.admitted_count(), 0);
    }

    #[test]
    fn top_and_bottom_floors_are_valid() {
        let mut v = RequestValidator::new(25);
        assert!(v.admit(&CallRequest::new(0, 1, 1, 25)).is_ok());
        assert!(v.admit(&CallRequest::new(0, 2, 25, 1)).is_ok());
    }

    #[test]
    fn rejects_same_floor() {
        let mut v = RequestValidator::new(25);
        let err = v.admit(&CallRequest::new(0, 9, 6, 6)).unwrap_err();
        assert_eq!(err, RequestRejection::SameFloor { id: RequestId(9), floor: 6 });
    }

    #[test]
    fn rejects_duplicate_id_keeps_first() {
        let mut v = RequestValidator::new(25);
        assert!(v.admit(&CallRequest::new(0, 3, 1, 2)).is_ok());
        let err = v.admit(&CallRequest::new(5, 3, 4, 8)).unwrap_err();
        assert_eq!(err, RequestRejection::DuplicateId { id: RequestId(3) });
        assert_eq!(err.id(), RequestId(3));
        assert_eq!(v.admitted_count(), 1);
    }

    #[test]
    fn rejected_request_does_not_reserve_id() {
        let mut v = RequestValidator::new(25);
        assert!(v.admit(&CallRequest::new(0, 3, 4, 4)).is_err());
        assert!(v.admit(&CallRequest::new(0, 3, 4, 5)).is_ok());
    }
}

// ── ArrivalQueue ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod arrival_queue {
    use dd_core::{RequestId, Tick};

    use super::req;
    use crate::ArrivalQueue;

    #[test]
    fn push_and_drain_sorted_by_id() {
        let mut q = ArrivalQueue::new();
        q.push(req(7, 3, 1, 5));
        q.push(req(2, 3, 4, 1));
        q.push(req(5, 3, 2, 9));
        assert_eq!(q.len(), 3);

        let drained = q.drain_tick(Tick(3)).unwrap();
        let ids: Vec<RequestId> = drained.iter().map(|r| r.id).collect();
        assert_eq!(ids, vec![RequestId(2), RequestId(5), RequestId(7)]);
        assert!(q.is_empty());
    }

    #[test]
    fn drain_absent_tick_returns_none() {
        let mut q = ArrivalQueue::from_requests([req(1, 10, 1, 2)]);
        assert!(q.drain_tick(Tick(9)).is_none());
        assert_eq!(q.len(), 1);
    }

    #[test]
    fn drains_each_tick_once() {
        let mut q = ArrivalQueue::from_requests([req(1, 10, 1, 2), req(2, 4, 1, 2), req(3, 10, 3, 2)]);
        assert_eq!(q.len(), 3);
        assert_eq!(q.drain_tick(Tick(4)).map(|v| v.len()), Some(1));
        assert_eq!(q.drain_tick(Tick(10)).map(|v| v.len()), Some(2));
        assert!(q.drain_tick(Tick(10)).is_none());
        assert!(q.is_empty());
    }

    #[test]
    fn empty_queue() {
        let q = ArrivalQueue::new();
        assert!(q.is_empty());
        assert_eq!(q.len(), 0);
    }
}

// ── Loader ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod loader {
    use std::io::Cursor;

    use dd_core::RequestId;

    use crate::{CallRequest, RequestError, load_requests_reader, write_requests};

    #[test]
    fn loads_rows_in_file_order() {
        let csv = "time,id,source,dest\n10,3,20,1\n0,1,1,51\n0,2,1,37\n";
        let requests = load_requests_reader(Cursor::new(csv)).unwrap();
        assert_eq!(
            requests,
            vec![
                CallRequest::new(10, 3, 20, 1),
                CallRequest::new(0, 1, 1, 51),
                CallRequest::new(0, 2, 1, 37),
            ]
        );
    }

    #[test]
    fn negative_values_parse() {
        let csv = "time,id,source,dest\n-4,1,-2,3\n";
        let requests = load_requests_reader(Cursor::new(csv)).unwrap();
        assert_eq!(requests[0].time, -4);
        assert_eq!(requests[0].source, -2);
    }

    #[test]
    fn whitespace_is_trimmed() {
        let csv = "time, id, source, dest\n 5 , 8 , 2 , 9 \n";
        let requests = load_requests_reader(Cursor::new(csv)).unwrap();
        assert_eq!(requests[0].id, RequestId(8));
        assert_eq!(requests[0].dest, 9);
    }

    #[test]
    fn malformed_row_is_parse_error() {
        let csv = "time,id,source,dest\n0,1,1,2\nsoon,2,1,3\n";
        let err = load_requests_reader(Cursor::new(csv)).unwrap_err();
        match err {
            RequestError::Parse(msg) => assert!(msg.starts_with("row 2"), "{msg}"),
            other => panic!("expected Parse, got {other:?}"),
        }
    }

    #[test]
    fn header_only_is_empty() {
        let requests = load_requests_reader(Cursor::new("time,id,source,dest\n")).unwrap();
        assert!(requests.is_empty());
    }

    #[test]
    fn written_requests_load_back() {
        let original = vec![CallRequest::new(0, 1, 1, 12), CallRequest::new(3, 2, 9, 4)];
        let mut buf = Vec::new();
        write_requests(&mut buf, &original).unwrap();
        let text = String::from_utf8(buf.clone()).unwrap();
        assert!(text.starts_with("time,id,source,dest\n"));
        assert_eq!(load_requests_reader(Cursor::new(buf)).unwrap(), original);
    }
}

// ── Generator ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod generator {
    use crate::{RequestValidator, WorkloadSpec};

    fn spec(requests: u32) -> WorkloadSpec {
        WorkloadSpec { requests, floor_count: 20, horizon: 500, lobby_share: 0.4 }
    }

    #[test]
    fn same_seed_same_workload() {
        assert_eq!(spec(200).generate(42), spec(200).generate(42));
    }

    #[test]
    fn different_seeds_differ() {
        assert_ne!(spec(200).generate(1), spec(200).generate(2));
    }

    #[test]
    fn every_generated_request_is_admissible() {
        let requests = spec(500).generate(7);
        assert_eq!(requests.len(), 500);
        let mut v = RequestValidator::new(20);
        for r in &requests {
            assert!(v.admit(r).is_ok(), "{r:?}");
            assert!(r.time < 500);
        }
    }

    #[test]
    fn sorted_by_time_with_sequential_ids() {
        let requests = spec(100).generate(3);
        assert!(requests.windows(2).all(|w| w[0].time <= w[1].time));
        for (i, r) in requests.iter().enumerate() {
            assert_eq!(r.id.0, i as u32 + 1);
        }
    }

    #[test]
    fn full_lobby_share_starts_at_ground() {
        let ws = WorkloadSpec { lobby_share: 1.0, ..spec(50) };
        assert!(ws.generate(9).iter().all(|r| r.source == 1 && r.dest > 1));
    }

    #[test]
    fn single_floor_building_yields_nothing() {
        let ws = WorkloadSpec { floor_count: 1, ..spec(10) };
        assert!(ws.generate(1).is_empty());
    }
}
