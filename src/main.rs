#![no_std]
#![no_main]

use esp_hal::analog::adc::{Adc, AdcConfig, Attenuation};
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Level, Output, OutputConfig, Pull};
use esp_hal::rng::Rng;
use esp_hal::timer::timg::TimerGroup;
use esp_println::println;

// WiFi imports
use esp_wifi::wifi;

// Embassy-net imports
use embassy_net::{Config, StackResources};
use embassy_time::{Duration, Timer};
use esp_hal_embassy::Executor;
use static_cell::StaticCell;

// Import our library modules
use joytx_rs::indicator::IndicatorLeds;
use joytx_rs::link::UdpLink;
use joytx_rs::sample::InputSampler;
use joytx_rs::wifi::WiFiManager;
use joytx_rs::{config, telemetry};

// Add app descriptor for espflash compatibility
esp_bootloader_esp_idf::esp_app_desc!();

// Static cells for embassy components
static WIFI_INIT_CELL: StaticCell<esp_wifi::EspWifiController<'static>> = StaticCell::new();
static STACK_RESOURCES: StaticCell<StackResources<3>> = StaticCell::new();
static EXECUTOR: StaticCell<Executor> = StaticCell::new();

#[panic_handler]
fn panic(_: &core::panic::PanicInfo) -> ! {
    loop {}
}

/// Terminal fail-stop for errors before the executor starts: error
/// indicator held on, device idles until power-cycle.
fn fail_stop(leds: &mut IndicatorLeds<'static>) -> ! {
    leds.set_error(true);
    loop {}
}

/// Terminal fail-stop inside the telemetry task, same contract as
/// [`fail_stop`] but yielding to the executor.
async fn halted() -> ! {
    loop {
        Timer::after(Duration::from_secs(1)).await;
    }
}

// Embassy task to run the network stack
#[embassy_executor::task]
async fn net_task(
    mut runner: embassy_net::Runner<'static, esp_wifi::wifi::WifiDevice<'static>>,
) -> ! {
    runner.run().await
}

/// Main telemetry task: one bring-up pass, then the unbounded
/// sample -> decide -> encode -> send -> sleep loop.
#[embassy_executor::task]
async fn telemetry_task(
    mut wifi_manager: WiFiManager<'static>,
    mut sampler: InputSampler<'static>,
    mut leds: IndicatorLeds<'static>,
) -> ! {
    match wifi_manager
        .bring_up(
            config::WIFI_SSID,
            config::WIFI_PASSWORD,
            config::WIFI_CONNECT_TIMEOUT_MS,
        )
        .await
    {
        Ok(()) => {
            leds.set_primary(true);
            if let Some(ip) = wifi_manager.ip_address() {
                println!("[WIFI] Connected, IP: {}.{}.{}.{}", ip[0], ip[1], ip[2], ip[3]);
            }
        }
        Err(e) => {
            println!("[WIFI] Bring-up failed: {:?}", e);
            leds.set_error(true);
            halted().await
        }
    }

    // No receive path exists; the rx buffers only satisfy the socket API.
    let mut rx_meta = [embassy_net::udp::PacketMetadata::EMPTY; 2];
    let mut rx_buffer = [0u8; 64];
    let mut tx_meta = [embassy_net::udp::PacketMetadata::EMPTY; 4];
    let mut tx_buffer = [0u8; 256];

    let mut link = match UdpLink::open(
        wifi_manager.stack(),
        &mut rx_meta,
        &mut rx_buffer,
        &mut tx_meta,
        &mut tx_buffer,
        config::REMOTE_ADDR,
        config::REMOTE_PORT,
    ) {
        Ok(link) => link,
        Err(e) => {
            println!("[UDP] Failed to open telemetry link: {:?}", e);
            leds.set_error(true);
            halted().await
        }
    };

    loop {
        let sample = sampler.sample();
        leds.apply(&sample);

        let message = telemetry::encode(&sample);
        match link.send(&message).await {
            Ok(()) => {
                println!("[UDP] Sent: {}", message.as_str());
                leds.set_status(true);
            }
            Err(e) => {
                println!("[UDP] Send failed: {:?}", e);
                leds.set_status(false);
            }
        }

        Timer::after(Duration::from_millis(config::SAMPLE_INTERVAL_MS)).await;
    }
}

#[esp_hal::main]
fn main() -> ! {
    let hal_config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(hal_config);

    // Initialize heap allocator for WiFi (72KB)
    esp_alloc::heap_allocator!(size: 72 * 1024);

    // Initialize embassy time system
    let timer_group0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timer_group0.timer0);

    // Indicator outputs start dark
    let mut leds = IndicatorLeds::new(
        Output::new(peripherals.GPIO8, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO9, Level::Low, OutputConfig::default()),
        Output::new(peripherals.GPIO10, Level::Low, OutputConfig::default()),
    );

    // Joystick axes on ADC1, buttons pulled up (pressed = low)
    let mut adc_config = AdcConfig::new();
    let x_pin = adc_config.enable_pin(peripherals.GPIO2, Attenuation::_11dB);
    let y_pin = adc_config.enable_pin(peripherals.GPIO3, Attenuation::_11dB);
    let adc = Adc::new(peripherals.ADC1, adc_config);

    let input_config = InputConfig::default().with_pull(Pull::Up);
    let sampler = InputSampler::new(
        adc,
        x_pin,
        y_pin,
        Input::new(peripherals.GPIO5, input_config),
        Input::new(peripherals.GPIO6, input_config),
        Input::new(peripherals.GPIO7, input_config),
    );

    // Initialize WiFi driver
    let timer_group1 = TimerGroup::new(peripherals.TIMG1);
    let rng = Rng::new(peripherals.RNG);
    let wifi_init = match esp_wifi::init(timer_group1.timer0, rng, peripherals.RADIO_CLK) {
        Ok(init) => init,
        Err(e) => {
            println!("[WIFI] Failed to initialize WiFi stack: {:?}", e);
            fail_stop(&mut leds);
        }
    };

    println!("[WIFI] WiFi driver initialized successfully");

    // Store wifi_init in static cell for 'static lifetime
    let wifi_init_ref = WIFI_INIT_CELL.init(wifi_init);

    let (wifi_controller, wifi_interfaces) = match wifi::new(wifi_init_ref, peripherals.WIFI) {
        Ok(parts) => parts,
        Err(e) => {
            println!("[WIFI] Failed to create WiFi controller: {:?}", e);
            fail_stop(&mut leds);
        }
    };
    let wifi_device = wifi_interfaces.sta;

    // Create embassy-net stack with DHCP configuration
    let stack_resources = STACK_RESOURCES.init(StackResources::new());
    let net_config = Config::dhcpv4(Default::default());
    let (stack, runner) = embassy_net::new(wifi_device, net_config, stack_resources, 1234);

    let wifi_manager = WiFiManager::new(wifi_controller, stack);

    println!("[MAIN] Hardware initialized, starting tasks");

    // Initialize embassy executor and run tasks
    let executor = EXECUTOR.init(Executor::new());
    executor.run(|spawner| {
        spawner.spawn(net_task(runner)).ok();
        spawner
            .spawn(telemetry_task(wifi_manager, sampler, leds))
            .ok();
    });
}
