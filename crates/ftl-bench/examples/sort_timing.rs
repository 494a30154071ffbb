//! Times the three sorts on the same seeded input and prints a table.

use ftl_algorithms::{bubble_sort, merge_sort, quick_sort};
use ftl_bench::{random_values, TimeUnit, Timer};

fn main() {
    println!("=== ftl sort timing ===\n");
    let sorts: [(&str, fn(&mut [i64])); 3] = [
        ("bubble", bubble_sort),
        ("merge", merge_sort),
        ("quick", quick_sort),
    ];

    for len in [1_000usize, 5_000, 20_000] {
        let input = random_values(42, len, 1_000_000);
        let mut expected = input.clone();
        expected.sort_unstable();

        println!("n = {len}");
        for (name, sort) in sorts {
            let mut data = input.clone();
            let mut timer = Timer::new();
            sort(&mut data);
            timer.stop();
            assert_eq!(data, expected, "{name} sort produced unsorted output");
            println!(
                "  {name:>6}: {:>10.3} {}",
                timer.elapsed(TimeUnit::Milli),
                TimeUnit::Milli.suffix()
            );
        }
        println!();
    }
}
