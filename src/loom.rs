#[cfg(all(test, feature = "loom"))]
mod tests {
    use crate::RingBuffer;
    use loom::{model::Builder, thread};

    #[test]
    fn test_spsc_byte_stream() {
        let mut builder = Builder::new();
        if builder.preemption_bound.is_none() {
            builder.preemption_bound = Some(3);
        }

        builder.check(|| {
            let (mut producer, mut consumer) = RingBuffer::with_capacity(2).unwrap().split();
            let payload: &[u8] = &[0xa1, 0xb2, 0xc3];

            let writer = thread::spawn(move || {
                let mut sent = 0;
                while sent < 3 {
                    let n = producer.put(&[0xa1, 0xb2, 0xc3][sent..]);
                    if n == 0 {
                        thread::yield_now();
                    }
                    sent += n;
                }
            });

            let mut received = Vec::new();
            let mut buf = [0u8; 2];
            while received.len() < payload.len() {
                let n = consumer.get(&mut buf);
                if n == 0 {
                    thread::yield_now();
                }
                received.extend_from_slice(&buf[..n]);
            }

            writer.join().unwrap();
            assert_eq!(received, payload);
        });
    }

    #[test]
    fn test_queries_stay_in_range() {
        let mut builder = Builder::new();
        if builder.preemption_bound.is_none() {
            builder.preemption_bound = Some(3);
        }

        builder.check(|| {
            let (mut producer, mut consumer) = RingBuffer::with_capacity(2).unwrap().split();

            let writer = thread::spawn(move || {
                producer.put(&[1, 2]);
                assert!(producer.space_len() <= producer.capacity());
                producer.put(&[3]);
            });

            let mut drained = 0;
            let mut buf = [0u8; 1];
            for _ in 0..4 {
                let len = consumer.data_len();
                assert!(len <= consumer.capacity());
                drained += consumer.get(&mut buf);
            }
            let _ = drained;

            writer.join().unwrap();
        });
    }
}
